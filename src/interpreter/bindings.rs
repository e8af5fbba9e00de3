use std::{collections::HashMap, str::FromStr};

use crate::error::BindingError;

/// A read-only table mapping variable letters to truth values.
///
/// The table is filled by its owner before evaluation and only borrowed
/// afterwards. Letters without an entry evaluate to `false`.
///
/// ## Example
/// ```
/// use boolexpr::interpreter::bindings::Bindings;
///
/// let bindings = Bindings::default().with('a', true);
/// assert!(bindings.lookup('a'));
/// assert!(bindings.lookup('T'));
/// assert!(!bindings.lookup('z'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<char, bool>,
}

impl Bindings {
    /// Creates a table with no entries, not even the `T`/`F` literals.
    #[must_use]
    pub fn empty() -> Self {
        Self { values: HashMap::new() }
    }

    /// Returns the table with `name` bound to `value`, replacing any earlier
    /// binding of the same letter.
    #[must_use]
    pub fn with(mut self, name: char, value: bool) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: char, value: bool) -> Option<bool> {
        self.values.insert(name, value)
    }

    /// Returns the bound value of `name`, or `None` if it is unbound.
    #[must_use]
    pub fn get(&self, name: char) -> Option<bool> {
        self.values.get(&name).copied()
    }

    /// Returns the value of `name`, treating unbound letters as `false`.
    #[must_use]
    pub fn lookup(&self, name: char) -> bool {
        self.get(name).unwrap_or_else(|| {
                           tracing::trace!(%name, "unbound variable evaluates to false");
                           false
                       })
    }

    /// Whether `name` has an entry in the table.
    #[must_use]
    pub fn contains(&self, name: char) -> bool {
        self.values.contains_key(&name)
    }

    /// Number of bound letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The literal table: `T` and `t` are true, `F` and `f` are false.
impl Default for Bindings {
    fn default() -> Self {
        [('T', true), ('t', true), ('F', false), ('f', false)].into_iter()
                                                             .collect()
    }
}

impl FromIterator<(char, bool)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl Extend<(char, bool)> for Bindings {
    fn extend<I: IntoIterator<Item = (char, bool)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl Extend<Binding> for Bindings {
    fn extend<I: IntoIterator<Item = Binding>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|binding| (binding.name, binding.value)));
    }
}

/// A single `name=value` binding, as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// The variable letter.
    pub name:  char,
    /// The truth value bound to it.
    pub value: bool,
}

impl FromStr for Binding {
    type Err = BindingError;

    /// Parses `name=value`, where `name` is one ASCII letter and `value` is
    /// one of `true`, `false`, `t`, `f`, `1` or `0` (case-insensitive).
    ///
    /// ## Example
    /// ```
    /// use boolexpr::interpreter::bindings::Binding;
    ///
    /// let binding: Binding = "a=true".parse().unwrap();
    /// assert_eq!(binding, Binding { name: 'a', value: true });
    /// assert!("ab=1".parse::<Binding>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) =
            s.split_once('=')
             .ok_or_else(|| BindingError::MissingSeparator { binding: s.to_string() })?;

        let name = name.trim();
        let mut letters = name.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(BindingError::InvalidName { name: name.to_string() }),
        };

        let value = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => true,
            "false" | "f" | "0" => false,
            _ => return Err(BindingError::InvalidValue { value: value.to_string() }),
        };

        Ok(Self { name:  letter,
                  value, })
    }
}
