use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    builder_director::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    builder_director::demo::run(&mut out)
}
