use ferrous_dig_domain::DomainError;
use std::process::ExitCode;

pub const USAGE_ERROR: u8 = 1;
/// dig's code for "no reply"
pub const NO_REPLY: u8 = 9;
pub const BAD_REPLY: u8 = 10;

/// Maps a failed run to the process exit status.
pub fn code_for(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<DomainError>() {
        Some(e) if e.is_transport_error() => NO_REPLY,
        Some(e) if e.is_bad_reply() => BAD_REPLY,
        _ => USAGE_ERROR,
    }
}

pub fn exit_code(error: &anyhow::Error) -> ExitCode {
    ExitCode::from(code_for(error))
}
