//! Read-only tables of installable packages and their feature sub-questions.

use indexmap::IndexMap;

/// A selectable project variant, backed by a branch of the boilerplate repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVariant {
    pub id: String,
    pub title: String,
    pub source_branch: String,
    /// Keys into [`Catalog::features`] asked after this package is selected.
    pub feature_keys: Vec<String>,
}

impl PackageVariant {
    pub fn new(id: &str, title: &str, source_branch: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            source_branch: source_branch.to_string(),
            feature_keys: Vec::new(),
        }
    }

    pub fn with_features(mut self, keys: &[&str]) -> Self {
        self.feature_keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }
}

/// One option of a feature question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVariant {
    pub id: String,
    pub title: String,
    pub internal_name: String,
}

impl FeatureVariant {
    pub fn new(id: &str, title: &str, internal_name: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            internal_name: internal_name.to_string(),
        }
    }
}

/// A feature that ships in more than one structure.
#[derive(Debug, Clone)]
pub struct FeatureDescriptor {
    /// Printed before the variant list, usually a pointer to further reading.
    pub pre_description: Option<String>,
    pub prompt_text: String,
    pub validation_pattern: String,
    pub error_message: String,
    pub variants: Vec<FeatureVariant>,
}

impl FeatureDescriptor {
    pub fn find_variant(&self, id: &str) -> Option<&FeatureVariant> {
        self.variants.iter().find(|variant| variant.id == id)
    }
}

/// Package and feature tables consumed by package selection.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub packages: Vec<PackageVariant>,
    pub features: IndexMap<String, FeatureDescriptor>,
}

impl Catalog {
    /// The packages published by the boilerplate repository.
    pub fn builtin() -> Self {
        let packages = vec![
            PackageVariant::new("1", "Base", "base"),
            PackageVariant::new("2", "Simple", "simple"),
            PackageVariant::new("3", "Complex", "complex").with_features(&["redux"]),
        ];

        let mut features = IndexMap::new();
        features.insert(
            "redux".to_string(),
            FeatureDescriptor {
                pre_description: Some(format!(
                    "Read more about code structure here {}",
                    console::style("https://redux.js.org/faq/codestructure#code-structure")
                        .underlined()
                )),
                prompt_text: "Which code structure of Redux do you want?".to_string(),
                validation_pattern: "[0-9]".to_string(),
                error_message: crate::constants::UNKNOWN_KEY_MESSAGE.to_string(),
                variants: vec![
                    FeatureVariant::new("1", "Ducks", "ducks"),
                    FeatureVariant::new("2", "Function", "function"),
                ],
            },
        );

        Self { packages, features }
    }

    pub fn find_package(&self, id: &str) -> Option<&PackageVariant> {
        self.packages.iter().find(|variant| variant.id == id)
    }

    pub fn feature(&self, key: &str) -> Option<&FeatureDescriptor> {
        self.features.get(key)
    }
}
