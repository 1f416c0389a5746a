/// True if no executable named `name` is found on the search path
pub fn command_missing(name: &str) -> bool {
    which::which(name).is_err()
}

/// First of `names` that is missing from the search path, if any
pub fn first_missing<'a>(names: &[&'a str]) -> Option<&'a str> {
    names.iter().copied().find(|name| command_missing(name))
}
