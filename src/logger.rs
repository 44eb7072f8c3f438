use crate::huffman::{CodeTable, Symbol};

#[ctor::ctor]
fn init() {
    if let Err(error) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, unable to load log4rs.yaml: {}", error);
    }
}

pub fn log_code_table<S: Symbol>(table: &CodeTable<S>) {
    for entry in table.codes() {
        log::debug!("{:?} -> {} ({} bits)", entry.symbol, entry.code, entry.length());
    }
}
