//! # Image to C header converter
#![warn(missing_docs)]

use color_eyre::eyre;

mod cli;

use cli::{convert, opt::Options};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    convert::run(&opt)
}
