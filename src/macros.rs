/// Builds a [`KeywordMap`](crate::KeywordMap) from `key => value` pairs, in order.
///
/// Values may be anything convertible into a [`KeywordValue`](crate::KeywordValue).
///
/// ```rust
/// use fcs_writer::{keywords, KeywordValue};
///
/// let map = keywords! {
///     "$PAR" => 2,
///     "$P1N" => "FSC-A",
///     "$P1G" => 1.0,
/// };
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get("$PAR"), Some(&KeywordValue::Integer(2)));
/// ```
#[macro_export]
macro_rules! keywords {
    () => {
        $crate::KeywordMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::KeywordMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
