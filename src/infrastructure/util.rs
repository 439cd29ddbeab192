use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(DefaultSlugGenerator.slugify("My Guide"), "my-guide");
        assert_eq!(DefaultSlugGenerator.slugify("Hi"), "hi");
    }

    #[test]
    fn punctuation_only_input_yields_empty_slug() {
        assert_eq!(DefaultSlugGenerator.slugify("!!!"), "");
    }
}
