use std::any::type_name;

/// Strips the module path (and any generic arguments) off a type name, for error messages
pub fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    let end = name.find('<').unwrap_or(name.len());
    let start = name[..end].rfind(':').map(|i| i + 1).unwrap_or(0);
    &name[start..end]
}
