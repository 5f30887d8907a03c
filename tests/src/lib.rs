pub mod util;

mod scan;
