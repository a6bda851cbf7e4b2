use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire value that distinguishes a missing key from an explicit `null` and from a supplied value.
///
/// Decoding yields `Null` or `Present`; fields using it must be marked `#[serde(default)]` so that a missing key
/// becomes `Absent`. Encoding writes `Absent` and `Null` as `null`; skip `Absent` with `Field::is_absent`.
#[derive(Clone, Default, Debug, PartialEq)]
pub(crate) enum Field<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn into_value(self) -> T
    where
        T: Default,
    {
        match self {
            Field::Present(value) => value,
            Field::Absent | Field::Null => T::default(),
        }
    }
}

impl<T: ZeroValue> Field<T> {
    pub fn absent_if_zero(value: T) -> Self {
        if value.is_zero() { Field::Absent } else { Field::Present(value) }
    }

    pub fn null_if_zero(value: T) -> Self {
        if value.is_zero() { Field::Null } else { Field::Present(value) }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => Ok(Field::Present(value)),
            None => Ok(Field::Null),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Present(value) => serializer.serialize_some(value),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

/// Values with a "nothing supplied" zero form: empty strings and empty sequences.
pub(crate) trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for &str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for &[T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
