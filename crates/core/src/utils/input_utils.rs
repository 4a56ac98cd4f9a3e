/// Cleans a value as the user types it.
///
/// Keeps ASCII digits and the first `.`; every other character (currency
/// symbols, separators, signs, later dots) is dropped.
pub fn sanitize_value_input(input: &str) -> String {
    let mut seen_dot = false;
    input
        .chars()
        .filter(|c| match *c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .collect()
}
