#![no_main]

//! Fuzz target for request validation.
//!
//! Every record a client can send must be accepted or rejected without
//! panicking, and the SMB1 path must never accept a frame whose declared
//! length exceeds the received bytes.

use libfuzzer_sys::fuzz_target;
use protocol::{CheckError, TransportHeader, check_message, check_smb1_message, is_smb_request};

fuzz_target!(|data: &[u8]| {
    let _ = is_smb_request(data);

    let smb2 = |_: &[u8]| -> Result<(), CheckError> { Ok(()) };
    let _ = check_message(data, &smb2);

    if check_smb1_message(data).is_ok() {
        let (header, message) = TransportHeader::split(data).expect("accepted record has a header");
        assert_eq!(message.len(), header.length_usize());
    }
});
