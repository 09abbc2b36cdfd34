/// Normalize a logical name for platforms whose identifier grammar forbids
/// dots and dashes.
///
/// Only apply this to derived block names and network references, never to
/// addresses or key material.
pub fn logical_name(name: &str) -> String {
    name.replace(['.', '-'], "_")
}
