mod builder;
mod header;
mod message;
mod name;
mod opcode;
mod question;
mod record;
mod response_code;

pub use builder::MessageBuilder;
pub use header::{Header, HEADER_LEN};
pub use message::Message;
pub use name::{DomainName, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use opcode::Opcode;
pub use question::Question;
pub use record::ResourceRecord;
pub use response_code::ResponseCode;
