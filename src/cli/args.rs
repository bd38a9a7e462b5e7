use clap::Parser;

const ABOUT: &str = "Morphology raw data checker.

Loads each morphology file (SWC or Neurolucida ASC) from a file or a \
directory and reports whether it contains soma points and whether its \
point identifiers are consecutive.";

const EPILOG: &str = "Examples:
  morphcheck --help                # print this help
  morphcheck some/path/neuron.swc  # check a single file
  morphcheck some/path             # check every morphology file in a directory";

#[derive(Parser, Debug)]
#[command(name = "morphcheck", about = ABOUT, after_help = EPILOG)]
pub struct CliArgs {
    /// Path to a morphology data file or a directory of files
    pub datapath: String,
}
