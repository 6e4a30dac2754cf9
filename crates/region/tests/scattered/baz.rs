use linkset_region::entry;

use super::{RECORDS, Record};

pub const BAZ: Record = Record::new("baz", 0xc0de);

// Same local name as a record elsewhere; statics are private to their module.
#[entry(RECORDS)]
static RECORD: Record = BAZ;
