// * Rejects array/object-style parameter notation such as `foo[]` or `foo[bar]`:
// * an opening bracket followed anywhere later by a closing bracket.
pub fn is_valid(name: &str) -> bool {
    match name.find('[') {
        Some(open) => !name[open + 1..].contains(']'),
        None => true,
    }
}
