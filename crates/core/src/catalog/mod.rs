//! Product and question catalogs: immutable after load, either compiled-in
//! seeds or JSON documents supplied through configuration.

pub mod seed;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::ProductCollection;
use crate::domain::question::QuestionCollection;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("could not parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub collections: Vec<ProductCollection>,
}

impl ProductCatalog {
    /// The compiled-in catalog covering all five insurance lines.
    pub fn builtin() -> Self {
        seed::product_catalog()
    }

    pub fn from_json_str(document: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })
    }

    /// Exact-name collection lookup; the dispatch join.
    pub fn collection(&self, name: &str) -> Option<&ProductCollection> {
        self.collections.iter().find(|collection| collection.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub collections: Vec<QuestionCollection>,
}

impl QuestionCatalog {
    /// The compiled-in intake questionnaire for all five lines.
    pub fn builtin() -> Self {
        seed::question_catalog()
    }

    pub fn from_json_str(document: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })
    }

    pub fn collection(&self, name: &str) -> Option<&QuestionCollection> {
        self.collections.iter().find(|collection| collection.collection_name == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::line::InsuranceLine;

    use super::{ProductCatalog, QuestionCatalog};

    #[test]
    fn builtin_catalogs_cover_every_insurance_line() {
        let products = ProductCatalog::builtin();
        let questions = QuestionCatalog::builtin();

        for line in InsuranceLine::ALL {
            let name = line.collection_name();
            let collection = products.collection(name).expect(name);
            assert!(!collection.products.is_empty(), "{name} has no products");
            assert!(questions.collection(name).is_some(), "{name} has no questions");
        }
    }

    #[test]
    fn collection_lookup_is_exact_match() {
        let products = ProductCatalog::builtin();
        assert!(products.collection("accident insurance").is_none());
        assert!(products.collection("Accident Insurance").is_some());
    }

    #[test]
    fn builtin_product_catalog_round_trips_through_json() {
        let catalog = ProductCatalog::builtin();
        let document = serde_json::to_string(&catalog).expect("serialize");
        let reloaded = ProductCatalog::from_json_str(&document).expect("reload");
        assert_eq!(catalog, reloaded);
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(ProductCatalog::from_json_str("{\"collections\": 7}").is_err());
        assert!(QuestionCatalog::from_json_str("not json").is_err());
    }
}
