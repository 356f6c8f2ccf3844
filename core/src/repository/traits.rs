use crate::error::Result;
use crate::model::record::Record;

pub trait RecordSource {
    fn read_records(&self) -> Result<Vec<Record>>;
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn read_records(&self) -> Result<Vec<Record>> {
        (**self).read_records()
    }
}
