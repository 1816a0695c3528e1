mod gen_reader;
pub use gen_reader::{GenFile, GenReader, GenReaderError};
