//! Convert a skeleton/atlas pair into `<basename>.json` and `<basename>.txt`.

use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use skeljson_core::Colors;
use skeljson_lib::{Atlas, AtlasError, DecodeError, Diagnostics, decode};
use tracing::info;

pub struct ConvertArgs {
    pub inputs: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub pretty: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("expected one `.skel` and one `.atlas` file")]
    MissingInput,
    #[error("`{}` and `{}` must share a basename", skel.display(), atlas.display())]
    BasenameMismatch { skel: PathBuf, atlas: PathBuf },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Atlas {
        path: PathBuf,
        #[source]
        source: AtlasError,
    },
    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The two inputs, told apart by extension.
#[derive(Debug, PartialEq, Eq)]
pub struct Inputs {
    pub skel: PathBuf,
    pub atlas: PathBuf,
    pub basename: String,
}

impl Inputs {
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self, ConvertError> {
        let find = |ext: &str| {
            paths
                .iter()
                .find(|p| p.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext)))
                .cloned()
        };
        let (Some(skel), Some(atlas)) = (find("skel"), find("atlas")) else {
            return Err(ConvertError::MissingInput);
        };

        let stem = |p: &Path| p.file_stem().map(|s| s.to_string_lossy().into_owned());
        match (stem(&skel), stem(&atlas)) {
            (Some(a), Some(b)) if a == b => Ok(Self {
                skel,
                atlas,
                basename: a,
            }),
            _ => Err(ConvertError::BasenameMismatch { skel, atlas }),
        }
    }

    /// `<dir>/<basename>.json` and `<dir>/<basename>.txt`, where `dir` defaults
    /// to the skeleton's directory.
    pub fn output_paths(&self, out_dir: Option<&Path>) -> (PathBuf, PathBuf) {
        let dir = out_dir
            .or_else(|| self.skel.parent())
            .unwrap_or_else(|| Path::new(""));
        (
            dir.join(format!("{}.json", self.basename)),
            dir.join(format!("{}.txt", self.basename)),
        )
    }
}

/// What a successful conversion wrote and how much of the input it read.
#[derive(Debug)]
pub struct Summary {
    pub json_path: PathBuf,
    pub report_path: PathBuf,
    pub file_len: usize,
    pub read_len: usize,
    pub fully_consumed: bool,
    pub diagnostics: Diagnostics,
}

impl Summary {
    pub fn render(&self, colored: bool) -> String {
        let mut out = String::new();
        self.format(&mut out, Colors::new(colored))
            .expect("String write never fails");
        out
    }

    fn format(&self, w: &mut impl Write, c: Colors) -> fmt::Result {
        writeln!(w, "Wrote {}", self.json_path.display())?;
        writeln!(w, "Wrote {}", self.report_path.display())?;
        writeln!(w, "{}File length: {}{}", c.dim, self.file_len, c.reset)?;
        writeln!(w, "{}Read length: {}{}", c.dim, self.read_len, c.reset)?;

        if self.fully_consumed {
            writeln!(w, "{}Conversion complete.{}", c.green, c.reset)?;
        } else {
            writeln!(
                w,
                "{}Read length differs from file length; the skeleton may not be a 3.5 export.{}",
                c.yellow, c.reset
            )?;
        }

        let n = self.diagnostics.len();
        if n > 0 {
            writeln!(
                w,
                "{}{n} unsupported feature(s) noted in {}{}",
                c.yellow,
                self.report_path.display(),
                c.reset
            )?;
        }
        Ok(())
    }
}

pub fn run(args: ConvertArgs) {
    match convert(&args) {
        Ok(summary) => {
            if !summary.diagnostics.is_empty() {
                eprint!("{}", summary.diagnostics.render_colored(args.color));
            }
            print!("{}", summary.render(args.color));
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn convert(args: &ConvertArgs) -> Result<Summary, ConvertError> {
    let inputs = Inputs::from_paths(&args.inputs)?;

    let bytes = fs::read(&inputs.skel).map_err(io_error(&inputs.skel))?;
    let atlas_text = fs::read_to_string(&inputs.atlas).map_err(io_error(&inputs.atlas))?;
    let atlas = Atlas::parse(&atlas_text).map_err(|source| ConvertError::Atlas {
        path: inputs.atlas.clone(),
        source,
    })?;
    info!(regions = atlas.len(), "atlas loaded");

    let decoded = decode(&bytes, &atlas).map_err(|source| ConvertError::Decode {
        path: inputs.skel.clone(),
        source,
    })?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&decoded.document)?
    } else {
        serde_json::to_string(&decoded.document)?
    };

    let (json_path, report_path) = inputs.output_paths(args.out_dir.as_deref());
    if let Some(dir) = args.out_dir.as_deref() {
        fs::create_dir_all(dir).map_err(io_error(dir))?;
    }
    fs::write(&json_path, json).map_err(io_error(&json_path))?;
    fs::write(&report_path, decoded.diagnostics.render()).map_err(io_error(&report_path))?;

    Ok(Summary {
        json_path,
        report_path,
        file_len: decoded.total,
        read_len: decoded.consumed,
        fully_consumed: decoded.is_fully_consumed(),
        diagnostics: decoded.diagnostics,
    })
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ConvertError + '_ {
    move |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    }
}
