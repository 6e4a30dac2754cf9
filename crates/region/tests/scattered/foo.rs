use linkset_region::entry;

use crate::Record;

pub const FOO: Record = Record::new("foo", 0xc0ffe);

#[entry(crate::RECORDS)]
static FOO_RECORD: Record = FOO;
