//! `native-image.properties` rendering.
//!
//! # Responsibility
//! - Render the initialization descriptor into the build-argument text read
//!   by the native-image builder.
//! - Provide the same bytes as a file write or as an in-memory reader.
//!
//! # Invariants
//! - Output always starts with `REQUIRED_ARGS` and ends with exactly one `\n`.
//! - Per phase: classes first, then packages, insertion order, comma-joined.
//! - A phase with no classes and no packages emits no line at all.

use crate::descriptor::init::{InitPhase, InitializationDescriptor};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Fixed first token: options every generated image needs.
pub const REQUIRED_ARGS: &str = "Args = --allow-incomplete-classpath --report-unsupported-elements-at-runtime --no-fallback --no-server --install-exit-handlers -H:+InlineBeforeAnalysis";

/// Separator ending one argument line and starting the next.
const CONTINUATION: &str = " \\\n";

const BUILD_TIME_OPTION: &str = "--initialize-at-build-time=";
const RUN_TIME_OPTION: &str = "--initialize-at-run-time=";

pub type PropertiesResult<T> = Result<T, PropertiesError>;

#[derive(Debug)]
pub enum PropertiesError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for PropertiesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(
                f,
                "failed to write native-image properties `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for PropertiesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Renders the full properties text.
pub fn render_native_image_properties(init: &InitializationDescriptor) -> String {
    let mut out = String::from(REQUIRED_ARGS);
    push_phase(&mut out, init, InitPhase::BuildTime, BUILD_TIME_OPTION);
    push_phase(&mut out, init, InitPhase::RunTime, RUN_TIME_OPTION);
    out.push('\n');
    out
}

/// Rendered properties as an owned byte reader.
pub fn native_image_properties_reader(init: &InitializationDescriptor) -> Cursor<Vec<u8>> {
    Cursor::new(render_native_image_properties(init).into_bytes())
}

/// Writes the rendered properties to `path`, replacing any existing file.
pub fn write_native_image_properties(
    init: &InitializationDescriptor,
    path: impl AsRef<Path>,
) -> PropertiesResult<()> {
    let path = path.as_ref();
    let content = render_native_image_properties(init);
    match std::fs::write(path, content.as_bytes()) {
        Ok(()) => {
            info!(
                "event=properties_write module=properties status=ok path={} bytes={}",
                path.display(),
                content.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=properties_write module=properties status=error path={} error={}",
                path.display(),
                err
            );
            Err(PropertiesError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

fn push_phase(out: &mut String, init: &InitializationDescriptor, phase: InitPhase, option: &str) {
    if !init.has_entries(phase) {
        return;
    }
    out.push_str(CONTINUATION);
    out.push_str(option);
    for (index, name) in init.entries(phase).enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(name);
    }
}
