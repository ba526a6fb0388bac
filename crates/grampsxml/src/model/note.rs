use super::HandleRef;

gramps_element! {
    /// A note record: text plus the style ranges applied to it.
    pub struct Note {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
            opt format: Option<bool> = "format",
            req r#type: String = "type",
        }
        children {
            one text: String = "text",
            many styles: Vec<Style> = "style",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}

gramps_element! {
    /// Markup applied to the note text. Later styles take precedence.
    pub struct Style {
        attributes {
            req name: String = "name",
            opt value: Option<String> = "value",
        }
        children {
            many ranges: Vec<Range> = "range",
        }
    }
}

gramps_element! {
    /// Character offsets `[start, end)` into the note text.
    pub struct Range {
        attributes {
            req start: i32 = "start",
            req end: i32 = "end",
        }
        children {}
    }
}

impl Range {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}
