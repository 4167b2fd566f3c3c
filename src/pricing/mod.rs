mod table;

pub(crate) use table::{PriceEntry, PriceTable};
