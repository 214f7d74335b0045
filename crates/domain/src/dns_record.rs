mod record;
mod record_type;

pub use record::{MxRecord, NsRecord, SrvRecord};
pub use record_type::RecordType;
