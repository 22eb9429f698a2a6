//! Reflection descriptors: which types and members stay reachable.
//!
//! # Invariants
//! - `ReflectionDescriptor` holds at most one `ClassDescriptor` per name.
//! - Merging two class descriptors with the same name unions flags and
//!   appends unseen methods/fields; nothing is removed.

use indexmap::{IndexMap, IndexSet};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Capability flag requested for one reflective type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    AllDeclaredConstructors,
    AllPublicConstructors,
    AllDeclaredMethods,
    AllPublicMethods,
    AllDeclaredFields,
    AllPublicFields,
    AllDeclaredClasses,
    AllPublicClasses,
    QueryAllDeclaredMethods,
    QueryAllPublicMethods,
    QueryAllDeclaredConstructors,
    QueryAllPublicConstructors,
}

const ALL_FLAGS: &[Flag] = &[
    Flag::AllDeclaredConstructors,
    Flag::AllPublicConstructors,
    Flag::AllDeclaredMethods,
    Flag::AllPublicMethods,
    Flag::AllDeclaredFields,
    Flag::AllPublicFields,
    Flag::AllDeclaredClasses,
    Flag::AllPublicClasses,
    Flag::QueryAllDeclaredMethods,
    Flag::QueryAllPublicMethods,
    Flag::QueryAllDeclaredConstructors,
    Flag::QueryAllPublicConstructors,
];

impl Flag {
    /// Key used in native-image JSON configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllDeclaredConstructors => "allDeclaredConstructors",
            Self::AllPublicConstructors => "allPublicConstructors",
            Self::AllDeclaredMethods => "allDeclaredMethods",
            Self::AllPublicMethods => "allPublicMethods",
            Self::AllDeclaredFields => "allDeclaredFields",
            Self::AllPublicFields => "allPublicFields",
            Self::AllDeclaredClasses => "allDeclaredClasses",
            Self::AllPublicClasses => "allPublicClasses",
            Self::QueryAllDeclaredMethods => "queryAllDeclaredMethods",
            Self::QueryAllPublicMethods => "queryAllPublicMethods",
            Self::QueryAllDeclaredConstructors => "queryAllDeclaredConstructors",
            Self::QueryAllPublicConstructors => "queryAllPublicConstructors",
        }
    }

    /// Whether this flag asks for constructors to be reflectively invocable.
    pub fn is_constructor_access(self) -> bool {
        matches!(
            self,
            Self::AllDeclaredConstructors | Self::AllPublicConstructors
        )
    }
}

/// Parses one flag from its JSON configuration key.
pub fn parse_flag(value: &str) -> Result<Flag, FlagParseError> {
    ALL_FLAGS
        .iter()
        .copied()
        .find(|flag| flag.as_str() == value)
        .ok_or_else(|| FlagParseError(value.to_string()))
}

/// Unknown reflection flag key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagParseError(pub String);

impl Display for FlagParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported reflection flag: {}", self.0)
    }
}

impl Error for FlagParseError {}

/// Set of flags on one class descriptor; duplicates collapse.
///
/// Serialized flattened into the owning descriptor as `"<flag>": true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet(IndexSet<Flag>);

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the flag was not present yet.
    pub fn insert(&mut self, flag: Flag) -> bool {
        self.0.insert(flag)
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.0.iter().copied()
    }

    fn union_with(&mut self, other: &FlagSet) {
        self.0.extend(other.0.iter().copied());
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<T: IntoIterator<Item = Flag>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|flag| (flag.as_str(), true)))
    }
}

impl<'de> Deserialize<'de> for FlagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, bool>::deserialize(deserializer)?;
        let mut flags = FlagSet::new();
        for (key, enabled) in raw {
            let flag = parse_flag(&key).map_err(D::Error::custom)?;
            if enabled {
                flags.insert(flag);
            }
        }
        Ok(flags)
    }
}

/// One method kept for reflection.
///
/// `parameter_types = None` matches every overload with that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_types: Option<Vec<String>>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types: None,
        }
    }

    pub fn with_parameters<I, S>(name: impl Into<String>, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameter_types: Some(parameter_types.into_iter().map(Into::into).collect()),
        }
    }
}

/// One field kept for reflection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_write: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_unsafe_access: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allow_write: false,
            allow_unsafe_access: false,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reflection request for one fully-qualified type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Dotted type name, e.g. `com.example.Foo$Bar`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(flatten)]
    pub flags: FlagSet,
}

impl ClassDescriptor {
    /// Creates a minimal descriptor: name only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            fields: Vec::new(),
            flags: FlagSet::new(),
        }
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.add_method(method);
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.add_field(field);
        self
    }

    pub fn add_method(&mut self, method: MethodDescriptor) {
        if !self.methods.contains(&method) {
            self.methods.push(method);
        }
    }

    pub fn add_field(&mut self, field: FieldDescriptor) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    /// Whether this descriptor names members that need member-level checks.
    ///
    /// Constructor-access flags count as members.
    pub fn members_specified(&self) -> bool {
        !self.methods.is_empty()
            || !self.fields.is_empty()
            || self.flags.iter().any(Flag::is_constructor_access)
    }

    /// Whether this descriptor carries nothing beyond its name.
    pub fn is_minimal(&self) -> bool {
        self.methods.is_empty() && self.fields.is_empty() && self.flags.is_empty()
    }

    /// Returns the name-only form of this descriptor.
    pub fn to_minimal(&self) -> Self {
        Self::new(self.name.clone())
    }

    /// Unions `other` into `self`. Caller guarantees equal names.
    pub fn merge(&mut self, other: &ClassDescriptor) {
        debug_assert_eq!(self.name, other.name);
        self.flags.union_with(&other.flags);
        for method in &other.methods {
            self.add_method(method.clone());
        }
        for field in &other.fields {
            self.add_field(field.clone());
        }
    }
}

/// Collection of class descriptors keyed by type name.
///
/// Serialized as the JSON array form used by `reflect-config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ClassDescriptor>", into = "Vec<ClassDescriptor>")]
pub struct ReflectionDescriptor {
    classes: IndexMap<String, ClassDescriptor>,
}

impl ReflectionDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one class descriptor by name.
    pub fn merge_class(&mut self, descriptor: &ClassDescriptor) {
        match self.classes.get_mut(descriptor.name.as_str()) {
            Some(existing) => existing.merge(descriptor),
            None => {
                self.classes
                    .insert(descriptor.name.clone(), descriptor.clone());
            }
        }
    }

    /// Unions every entry of `other` into `self`.
    pub fn merge(&mut self, other: &ReflectionDescriptor) {
        for descriptor in other.classes.values() {
            self.merge_class(descriptor);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn class_descriptors(&self) -> impl Iterator<Item = &ClassDescriptor> + '_ {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClassDescriptor> for ReflectionDescriptor {
    fn from_iter<T: IntoIterator<Item = ClassDescriptor>>(iter: T) -> Self {
        let mut descriptor = Self::new();
        for class in iter {
            descriptor.merge_class(&class);
        }
        descriptor
    }
}

impl From<Vec<ClassDescriptor>> for ReflectionDescriptor {
    fn from(value: Vec<ClassDescriptor>) -> Self {
        value.into_iter().collect()
    }
}

impl From<ReflectionDescriptor> for Vec<ClassDescriptor> {
    fn from(value: ReflectionDescriptor) -> Self {
        value.classes.into_values().collect()
    }
}
