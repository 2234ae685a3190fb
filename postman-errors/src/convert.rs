use crate::{
    collection::load_collection,
    configuration::ConversionOptions,
    devproxy_rc::{DevProxyRc, SectionName, RC_FILE_NAME},
    error::Error,
    errors_document::ErrorsDocument,
    walker::collect_error_groups,
};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Files written by a conversion that found error responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub errors_file: PathBuf,
    pub rc_file: PathBuf,
    pub error_groups: usize,
}

pub fn convert<P1: AsRef<Path>, P2: AsRef<Path>>(
    input_file: P1,
    output_folder: P2,
) -> Result<Option<ConversionReport>, Error> {
    convert_with_options(input_file, output_folder, &ConversionOptions::default())
}

/// Reads a Postman collection and writes a dev proxy errors file plus `devproxyrc.json`
/// into `output_folder`. Nothing is written when the collection records no error responses.
pub fn convert_with_options<P1: AsRef<Path>, P2: AsRef<Path>>(
    input_file: P1,
    output_folder: P2,
    options: &ConversionOptions,
) -> Result<Option<ConversionReport>, Error> {
    let output_folder = output_folder.as_ref();
    let collection = load_collection(input_file)?;
    let document = ErrorsDocument::new(collect_error_groups(&collection, options)?);

    let watch_pattern = match document.watch_pattern() {
        Some(watch_pattern) => watch_pattern,
        None => {
            debug!("No error responses found in collection. Exiting...");
            return Ok(None);
        }
    };

    let section = SectionName::from_output_folder(output_folder)?;

    if !output_folder.exists() {
        debug!("Creating output folder {}...", output_folder.display());
        fs::create_dir_all(output_folder)?;
    }

    let errors_file = output_folder.join(section.errors_file_name());
    debug!(
        "Writing errors file for {} to {}...",
        section.as_str(),
        errors_file.display()
    );
    write_json(&errors_file, &document)?;

    let rc = DevProxyRc::new(&section, watch_pattern, options);
    let rc_file = output_folder.join(RC_FILE_NAME);
    debug!("Writing rc file to {}...", rc_file.display());
    write_json(&rc_file, &rc)?;

    info!(
        "Wrote {} error groups to {}",
        document.errors.len(),
        errors_file.display()
    );

    Ok(Some(ConversionReport {
        errors_file,
        rc_file,
        error_groups: document.errors.len(),
    }))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value).map_err(Error::SerializationError)?;
    fs::write(path, json)?;
    Ok(())
}
