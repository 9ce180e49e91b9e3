use logging::{Level, Subsystem, capture_events};

use super::*;
use crate::error::CheckError;
use crate::smb2::SMB2_PROTOCOL_ID;
use crate::test_support::{Smb1Request, frame};

#[test]
fn every_known_command_accepts_its_minimal_request() {
    for command in Smb1Command::ALL {
        let record = Smb1Request::minimal(command).build();
        assert_eq!(check_smb1_message(&record), Ok(()), "{command}");
    }
}

#[test]
fn close_with_three_words_passes() {
    let record = Smb1Request::new(0x04).words(3).build();
    assert_eq!(check_smb1_message(&record), Ok(()));
}

#[test]
fn close_with_two_words_is_structure_mismatch() {
    let record = Smb1Request::new(0x04).words(2).build();
    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::StructureMismatch {
            command: 0x04,
            actual: 2
        })
    );
}

#[test]
fn unknown_command_is_reported_separately() {
    let record = Smb1Request::new(0xFF).build();
    let (result, events) = capture_events(|| check_smb1_message(&record));

    assert_eq!(result, Err(CheckError::UnsupportedCommand { command: 0xFF }));
    assert!(events.iter().any(|event| {
        event.subsystem == Subsystem::Smb1
            && event.level == Level::ERROR
            && event.message == "Not support cmd ff"
    }));
}

#[test]
fn unknown_command_never_reads_the_byte_count() {
    // The declared length stops right after the word count field.
    let record = Smb1Request::new(0xFF)
        .declared_len(SMB1_HEADER_LEN as u32)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::UnsupportedCommand { command: 0xFF })
    );
}

#[test]
fn bad_signature_is_malformed() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .protocol(*b"\xFFSMC")
        .build();
    assert_eq!(check_smb1_message(&record), Err(CheckError::MalformedHeader));
}

#[test]
fn smb2_signature_on_the_smb1_path_is_malformed() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .protocol(SMB2_PROTOCOL_ID)
        .build();
    assert_eq!(check_smb1_message(&record), Err(CheckError::MalformedHeader));
}

#[test]
fn responses_are_refused() {
    let record = Smb1Request::minimal(Smb1Command::Echo).response().build();
    let (result, events) = capture_events(|| check_smb1_message(&record));

    assert_eq!(result, Err(CheckError::MalformedHeader));
    assert!(events.iter().any(|event| {
        event.subsystem == Subsystem::Smb1
            && event.level == Level::ERROR
            && event.message == "Client sent response, not request"
    }));
}

#[test]
fn bad_signature_is_logged_as_an_error() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .protocol(*b"\xFFSMC")
        .build();
    let (result, events) = capture_events(|| check_smb1_message(&record));

    assert_eq!(result, Err(CheckError::MalformedHeader));
    assert!(events.iter().any(|event| {
        event.level == Level::ERROR && event.message.starts_with("Bad protocol string")
    }));
}

#[test]
fn declared_length_past_received_bytes_is_logged_as_an_error() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .declared_len(200)
        .build();
    let (result, events) = capture_events(|| check_smb1_message(&record));

    assert!(matches!(result, Err(CheckError::Truncated { .. })));
    assert!(events.iter().any(|event| {
        event.subsystem == Subsystem::Smb1
            && event.level == Level::ERROR
            && event.message.starts_with("cli req truncated")
    }));
}

#[test]
fn every_rejection_emits_exactly_one_error() {
    let rejected = [
        Smb1Request::minimal(Smb1Command::Close).response().build(),
        Smb1Request::minimal(Smb1Command::Close).declared_len(200).build(),
        Smb1Request::new(0x04).words(2).build(),
        Smb1Request::new(0xFF).build(),
    ];

    for record in rejected {
        let (result, events) = capture_events(|| check_smb1_message(&record));
        assert!(result.is_err());
        let errors = events
            .iter()
            .filter(|event| event.level == Level::ERROR)
            .count();
        assert_eq!(errors, 1, "{result:?}");
    }
}

#[test]
fn header_guard_accepts_a_plain_request() {
    let message = Smb1Request::minimal(Smb1Command::Negotiate).message();
    assert_eq!(check_smb1_hdr(&message), Ok(()));
}

#[test]
fn header_guard_reports_short_signatures_as_truncated() {
    assert_eq!(
        check_smb1_hdr(b"\xFFSM"),
        Err(CheckError::Truncated {
            needed: 4,
            available: 3
        })
    );
}

#[test]
fn write_andx_length_mismatch_is_tolerated() {
    // 24 parameter bytes, 5 data bytes, byte count claims 3.
    let record = Smb1Request::new(0x2F)
        .words(12)
        .param(20, 4)
        .param(22, 60)
        .data(&[0; 5])
        .byte_count(3)
        .build();

    let (result, events) = capture_events(|| check_smb1_message(&record));
    assert_eq!(result, Ok(()));
    assert!(events.iter().all(|event| event.level != Level::ERROR));
}

#[test]
fn same_mismatch_on_plain_write_is_rejected() {
    let record = Smb1Request::new(0x0B)
        .words(5)
        .data(&[0; 5])
        .byte_count(3)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::LengthMismatch {
            command: 0x0B,
            computed: 48,
            declared: 50,
        })
    );
}

#[test]
fn mismatch_logs_the_short_request() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .data(&[0; 2])
        .byte_count(0)
        .build();
    let (result, events) = capture_events(|| check_smb1_message(&record));

    assert_eq!(
        result,
        Err(CheckError::LengthMismatch {
            command: 0x04,
            computed: 41,
            declared: 43,
        })
    );
    assert!(
        events
            .iter()
            .any(|event| event.message == "cli req too short, len 43 not 41. cmd:4")
    );
}

#[test]
fn write_andx_data_past_the_envelope_is_overrun() {
    let record = Smb1Request::minimal(Smb1Command::WriteAndx)
        .param(20, 100)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::SecondaryRegionOverrun {
            command: 0x2F,
            required: 100,
            declared: 60,
        })
    );
}

#[test]
fn write_andx_high_length_word_does_not_wrap() {
    let record = Smb1Request::minimal(Smb1Command::WriteAndx)
        .param(18, 0xFFFF)
        .param(20, 0xFFFF)
        .param(22, 0xFFFF)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::SecondaryRegionOverrun {
            command: 0x2F,
            required: 0xFFFF_FFFF + 0xFFFF,
            declared: 60,
        })
    );
}

#[test]
fn transaction_data_past_the_envelope_is_overrun() {
    let record = Smb1Request::minimal(Smb1Command::Transaction)
        .param(22, 10)
        .param(24, 60)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::SecondaryRegionOverrun {
            command: 0x25,
            required: 70,
            declared: 63,
        })
    );
}

#[test]
fn transaction2_data_past_the_envelope_is_overrun() {
    let record = Smb1Request::minimal(Smb1Command::Transaction2)
        .param(22, 1)
        .param(24, 65)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::SecondaryRegionOverrun {
            command: 0x32,
            required: 66,
            declared: 65,
        })
    );
}

#[test]
fn data_region_ending_at_the_envelope_is_accepted() {
    let record = Smb1Request::minimal(Smb1Command::Transaction)
        .param(22, 3)
        .param(24, 60)
        .build();
    assert_eq!(check_smb1_message(&record), Ok(()));
}

#[test]
fn transaction_word_count_is_a_lower_bound() {
    for words in [14, 18] {
        let record = Smb1Request::new(0x25).words(words).build();
        assert_eq!(check_smb1_message(&record), Ok(()), "{words} words");
    }

    let record = Smb1Request::new(0x25).words(13).build();
    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::StructureMismatch {
            command: 0x25,
            actual: 13
        })
    );
}

#[test]
fn read_andx_accepts_either_word_count() {
    for words in [10, 12] {
        let record = Smb1Request::new(0x2E).words(words).build();
        assert_eq!(check_smb1_message(&record), Ok(()), "{words} words");
    }

    let record = Smb1Request::new(0x2E).words(11).build();
    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::StructureMismatch {
            command: 0x2E,
            actual: 11
        })
    );
}

#[test]
fn nt_create_andx_needs_an_extra_byte_for_unicode_names() {
    let unicode = Smb1Request::new(0xA2).words(24).unicode();

    assert_eq!(
        check_smb1_message(&unicode.clone().data(&[0; 2]).build()),
        Err(CheckError::ByteCountViolation {
            command: 0xA2,
            actual: 2
        })
    );
    assert_eq!(check_smb1_message(&unicode.data(&[0; 3]).build()), Ok(()));

    let ascii = Smb1Request::new(0xA2).words(24).data(&[0; 2]).build();
    assert_eq!(check_smb1_message(&ascii), Ok(()));
}

#[test]
fn close_with_trailing_bytes_is_byte_count_violation() {
    let record = Smb1Request::new(0x04).words(3).data(&[0]).build();
    let (result, events) = capture_events(|| check_smb1_message(&record));

    assert_eq!(
        result,
        Err(CheckError::ByteCountViolation {
            command: 0x04,
            actual: 1
        })
    );
    assert!(
        events
            .iter()
            .any(|event| event.message == "Invalid byte count 1 for cmd 4")
    );
}

#[test]
fn calc_size_matches_the_wire_layout() {
    for command in Smb1Command::ALL {
        let message = Smb1Request::minimal(command).message();
        let hdr = Smb1Header::parse(&message).unwrap();
        let expected = SMB1_MIN_MESSAGE_LEN as u32
            + 2 * u32::from(hdr.word_count())
            + u32::from(hdr.raw_byte_count().unwrap());

        assert_eq!(hdr.calc_size(), Ok(expected), "{command}");
        assert_eq!(expected as usize, message.len());
    }
}

#[test]
fn header_accessors_read_fixed_fields() {
    let message = Smb1Request::new(0xA2)
        .words(24)
        .unicode()
        .data(b"abc")
        .message();
    let hdr = Smb1Header::parse(&message).unwrap();

    assert_eq!(hdr.command(), Some(Smb1Command::NtCreateAndx));
    assert_eq!(hdr.command_code(), 0xA2);
    assert_eq!(hdr.flags(), 0);
    assert!(hdr.is_unicode());
    assert_eq!(hdr.word_count(), 24);
    assert_eq!(hdr.byte_count_offset(), 33 + 48);
    assert_eq!(hdr.data(), Ok(&b"abc"[..]));
    assert_eq!(hdr.as_bytes(), &message[..]);
}

#[test]
fn record_shorter_than_declared_is_truncated() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .declared_len(100)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::Truncated {
            needed: 104,
            available: 45
        })
    );
}

#[test]
fn message_too_short_for_the_flags_is_truncated() {
    let record = frame(b"\xFFSMB\x04", None);
    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::Truncated {
            needed: 10,
            available: 5
        })
    );
}

#[test]
fn byte_count_outside_the_declared_length_is_truncated() {
    let record = Smb1Request::minimal(Smb1Command::Close)
        .declared_len(SMB1_HEADER_LEN as u32)
        .build();

    assert_eq!(
        check_smb1_message(&record),
        Err(CheckError::Truncated {
            needed: 41,
            available: 33
        })
    );
}

#[test]
fn parameter_fields_outside_the_declared_length_are_truncated() {
    let record = Smb1Request::minimal(Smb1Command::WriteAndx)
        .declared_len(SMB1_HEADER_LEN as u32 + 10)
        .build();

    assert!(matches!(
        check_smb1_message(&record),
        Err(CheckError::Truncated { available: 43, .. })
    ));
}

#[test]
fn rule_table_matches_documented_structure_sizes() {
    assert_eq!(
        Smb1Command::Close.rules(),
        CommandRules {
            word_count: WordCountRule::Exact(3),
            byte_count: ByteCountRule::Exact(0),
        }
    );
    assert_eq!(
        Smb1Command::WriteAndx.rules().word_count,
        WordCountRule::Either(12, 14)
    );
    assert_eq!(
        Smb1Command::Transaction.rules().word_count,
        WordCountRule::AtLeast(14)
    );
    assert_eq!(
        Smb1Command::TreeConnectAndx.rules().byte_count,
        ByteCountRule::AtLeast(3)
    );
    assert_eq!(Smb1Command::NtCreateAndx.rules().byte_count.minimum(true), 3);
    assert_eq!(Smb1Command::NtCreateAndx.rules().byte_count.minimum(false), 2);
}

#[test]
fn command_codes_round_trip_through_names() {
    for command in Smb1Command::ALL {
        assert_eq!(Smb1Command::from_u8(command.as_u8()), Some(command));
        assert_eq!(command.name().parse::<Smb1Command>(), Ok(command));
        assert_eq!(command.to_string(), command.name());
    }
}

#[test]
fn unknown_codes_and_names_are_refused() {
    assert_eq!(Smb1Command::try_from(0x03), Err(0x03));
    assert_eq!(u8::from(Smb1Command::Negotiate), 0x72);

    let err = "SMB_COM_BOGUS".parse::<Smb1Command>().unwrap_err();
    assert_eq!(err.invalid_name(), "SMB_COM_BOGUS");
    assert_eq!(
        err.to_string(),
        "unknown SMB1 command name: \"SMB_COM_BOGUS\""
    );
}
