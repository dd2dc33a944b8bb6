use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum HeaderError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
    ProgressTemplate(indicatif::style::TemplateError),
}

impl HeaderError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HeaderError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HeaderError::Write {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            HeaderError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            HeaderError::Persist { path, source } => {
                write!(f, "failed to replace {}: {}", path.display(), source.error)
            }
            HeaderError::ProgressTemplate(err) => write!(f, "progress bar template error: {}", err),
        }
    }
}

impl Error for HeaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HeaderError::Read { source, .. } => Some(source),
            HeaderError::Write { source, .. } => Some(source),
            HeaderError::Persist { source, .. } => Some(source),
            HeaderError::ProgressTemplate(err) => Some(err),
        }
    }
}

impl From<indicatif::style::TemplateError> for HeaderError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        HeaderError::ProgressTemplate(err)
    }
}
