use linkset_region::entry;

use crate::Record;

pub const BAR: Record = Record::new("bar", 0xdead);

#[entry(crate::RECORDS)]
static BAR_RECORD: Record = BAR;
