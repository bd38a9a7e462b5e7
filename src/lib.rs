#![doc = r#"
morphcheck — a raw data checker for neuronal morphology files.

This crate loads SWC and Neurolucida ASC files into a format-agnostic raw
point table (one row per sample: position, radius, type, identifier and
parent identifier) and runs two structural sanity checks over it:

- does the file contain any soma points?
- are the point identifiers numbered consecutively?

It powers the `morphcheck` CLI and can be embedded in your own Rust
applications. It is a reporting tool: nothing is repaired or rewritten.

Check a file
------------
```rust,no_run
use std::path::Path;

fn main() -> morphcheck::Result<()> {
    let report = morphcheck::check_file(Path::new("cells/neuron.swc"))?;
    println!("soma: {}", report.has_soma_points);
    if !report.sequential_ids.status {
        println!("gaps after: {:?}", report.sequential_ids.info);
    }
    Ok(())
}
```

Check every file in a directory
-------------------------------
```rust,no_run
use std::path::Path;
use morphcheck::{discover_files, has_soma_points, load_data};

fn main() -> morphcheck::Result<()> {
    for path in discover_files(Path::new("cells"))? {
        let data = load_data(&path)?;
        println!("{}: {}", path.display(), has_soma_points(&data));
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `morphcheck::Result<T>`; match on `morphcheck::Error`
to handle specific cases, e.g. SWC or ASC parse errors.

```rust,no_run
use std::path::Path;
use morphcheck::{Error, load_data};

fn main() {
    match load_data(Path::new("cells/broken.swc")) {
        Ok(data) => println!("{} samples", data.data_block.nrows()),
        Err(Error::Swc(e)) => eprintln!("SWC error: {e}"),
        Err(Error::UnsupportedFormat(p)) => eprintln!("not a morphology file: {}", p.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points (`load_data`, `check_file`, `FileReport`).
- [`core`] — the raw point table and the structural checks.
- [`io`] — format readers and file discovery.
- [`types`] — `PointType` and `FileFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// Types
pub use crate::core::checks::CheckResult;
pub use crate::core::data::{PointTable, RawData, Sample};
pub use error::{Error, Result};
pub use types::{FileFormat, PointType};

// Readers
pub use io::{AscError, MorphologyReader, NeurolucidaReader, SwcError, SwcReader};

// Checks
pub use crate::core::checks::{has_sequential_ids, has_soma_points};

// High-level API re-exports
pub use api::{FileReport, check_data, check_file, discover_files, load_data};
