//! Shared Macros

/// Concatenate candidate lists from several strategies, in argument order.
#[macro_export]
macro_rules! merge {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut merged = $first;
        $(merged.extend($rest);)*
        merged
    }};
}

/// Drop exact repeats, keeping the first occurrence of each item.
#[macro_export]
macro_rules! dedupe {
    ($list:expr) => {{
        let mut seen = std::collections::HashSet::new();
        $list
            .into_iter()
            .filter(|item| seen.insert(item.clone()))
            .collect::<Vec<_>>()
    }};
}
