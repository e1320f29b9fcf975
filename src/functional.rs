//! Higher-order functions over optional slices.
//!
//! `None` stands for an absent sequence and is kept apart from an empty one:
//! `map` and `filter` return `None` only for an absent input.

/// Applies an action to each element, preserving order.
pub fn map<T, U, F>(data: Option<&[T]>, action: F) -> Option<Vec<U>>
where
    F: FnMut(&T) -> U,
{
    data.map(|data| data.iter().map(action).collect())
}

/// Keeps elements for which an action returns true, preserving order.
pub fn filter<T, F>(data: Option<&[T]>, mut action: F) -> Option<Vec<T>>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    data.map(|data| {
        data.iter()
            .filter(|&value| action(value))
            .cloned()
            .collect()
    })
}

/// Left fold starting from `initial`, which is returned as is for an absent or
/// empty input.
pub fn reduce<T, A, F>(data: Option<&[T]>, initial: A, action: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    data.unwrap_or_default().iter().fold(initial, action)
}
