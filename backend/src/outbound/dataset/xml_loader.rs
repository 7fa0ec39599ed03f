//! Read and decode the XML dataset.

use std::path::{Path, PathBuf};

use tracing::info;

use super::dto::DatasetDto;
use crate::domain::ports::InMemoryUserStore;

/// Failures while loading the dataset. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    /// The file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not a well-formed dataset.
    #[error("invalid dataset XML: {0}")]
    Parse(#[from] quick_xml::de::DeError),
    /// A row decoded but holds values the store cannot represent.
    #[error("invalid dataset row: {0}")]
    InvalidRow(String),
}

/// Load the dataset at `path`.
///
/// # Errors
/// [`DatasetLoadError::Io`] when the file cannot be read, otherwise the
/// errors of [`parse_users_xml`].
pub fn load_users_from_path(path: impl AsRef<Path>) -> Result<InMemoryUserStore, DatasetLoadError> {
    let dataset = path.as_ref();
    let document = std::fs::read_to_string(dataset).map_err(|source| DatasetLoadError::Io {
        path: dataset.to_path_buf(),
        source,
    })?;
    let store = parse_users_xml(&document)?;
    info!(path = %dataset.display(), users = store.len(), "user dataset loaded");
    Ok(store)
}

/// Decode a dataset document: a root element holding `<row>` elements.
///
/// # Errors
/// [`DatasetLoadError::Parse`] for malformed XML or rows missing required
/// elements; [`DatasetLoadError::InvalidRow`] for unknown genders.
///
/// # Examples
/// ```
/// use user_search::outbound::dataset::parse_users_xml;
///
/// let store = parse_users_xml(
///     "<root><row><id>0</id><age>22</age><first_name>Boyd</first_name>\
///      <last_name>Wolf</last_name><gender>male</gender><about>Nulla</about></row></root>",
/// )?;
/// assert_eq!(store.len(), 1);
/// # Ok::<(), user_search::outbound::dataset::DatasetLoadError>(())
/// ```
pub fn parse_users_xml(document: &str) -> Result<InMemoryUserStore, DatasetLoadError> {
    let decoded: DatasetDto = quick_xml::de::from_str(document)?;
    let users = decoded
        .into_domain_users()
        .map_err(DatasetLoadError::InvalidRow)?;
    Ok(InMemoryUserStore::new(users))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for dataset decoding.

    use super::*;
    use crate::domain::ports::UserStore;
    use crate::domain::{Gender, User};
    use std::io::Write;

    const DATASET: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<root>
  <row>
    <id>0</id>
    <guid>1a6fa827-62f1-45f6-b579-aaead2b47169</guid>
    <isActive>false</isActive>
    <balance>$2,144.93</balance>
    <age>22</age>
    <eyeColor>green</eyeColor>
    <first_name>Boyd</first_name>
    <last_name>Wolf</last_name>
    <gender>male</gender>
    <company>HOPELI</company>
    <email>boydwolf@hopeli.com</email>
    <about>Nulla cillum enim voluptate consequat laborum esse excepteur.</about>
  </row>
  <row>
    <id>1</id>
    <age>21</age>
    <first_name>Hilda</first_name>
    <last_name>Mayer</last_name>
    <gender>female</gender>
    <about>Sit commodo consectetur minim amet ex.</about>
  </row>
</root>"#;

    fn ids(store: &InMemoryUserStore) -> Vec<i64> {
        store
            .users()
            .expect("in-memory store is readable")
            .iter()
            .map(User::id)
            .collect()
    }

    #[test]
    fn decodes_rows_in_document_order() {
        let store = parse_users_xml(DATASET).expect("dataset decodes");
        assert_eq!(ids(&store), vec![0, 1]);

        let users = store.users().expect("readable");
        assert_eq!(users[0].name(), "Boyd Wolf");
        assert_eq!(users[0].age(), 22);
        assert_eq!(users[0].gender(), Gender::Male);
        assert!(users[0].about().starts_with("Nulla cillum enim"));
        assert_eq!(users[1].gender(), Gender::Female);
    }

    #[test]
    fn empty_root_yields_empty_store() {
        let store = parse_users_xml("<root></root>").expect("empty dataset decodes");
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_non_numeric_age() {
        let document = "<root><row><id>0</id><age>old</age><first_name>A</first_name>\
            <last_name>B</last_name><gender>male</gender></row></root>";
        let error = parse_users_xml(document).expect_err("age must be numeric");
        assert!(matches!(error, DatasetLoadError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_gender() {
        let document = "<root><row><id>7</id><age>30</age><first_name>A</first_name>\
            <last_name>B</last_name><gender>other</gender></row></root>";
        let error = parse_users_xml(document).expect_err("gender must be known");
        assert!(matches!(error, DatasetLoadError::InvalidRow(ref message) if message.contains("row 7")));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(DATASET.as_bytes()).expect("write dataset");

        let store = load_users_from_path(file.path()).expect("dataset loads");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = load_users_from_path(dir.path().join("absent.xml"))
            .expect_err("missing file must fail");
        assert!(matches!(error, DatasetLoadError::Io { .. }));
    }
}
