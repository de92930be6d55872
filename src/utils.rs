/// Builds a [`PropertyMap`](crate::PropertyMap) from `key => [values]` pairs.
///
/// ```
/// let map = tagunion::property_map! {"TITLE" => ["Foo"], "ARTIST" => ["A", "B"]};
/// assert_eq!(map.get("artist").unwrap(), ["A", "B"]);
/// ```
#[macro_export]
macro_rules! property_map {
    {$($key:expr => [$($value:expr),* $(,)?]),+ $(,)?} => {{
        let mut map = $crate::PropertyMap::new();
        $(
            let values: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$($value.to_string()),*];
            map.insert($key, values);
        )+
        map
    }};
    {} => {$crate::PropertyMap::new()}
}
