use std::collections::HashMap;

/// Fills `{key}` placeholders in a message template.
pub struct MessageBuilder {
    template: &'static str,
    vars: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: HashMap::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(key, value.into());
        self
    }

    pub fn build(self) -> String {
        let mut result = self.template.to_string();
        for (key, value) in self.vars {
            result = result.replace(&format!("{{{key}}}"), &value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let out = MessageBuilder::new("{who} met {who} at {place}")
            .var("who", "Ana")
            .var("place", "noon")
            .build();
        assert_eq!(out, "Ana met Ana at noon");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let out = MessageBuilder::new("{a} and {b}").var("a", "1").build();
        assert_eq!(out, "1 and {b}");
    }
}
