//! Elements shared by several record kinds: plain references, attributes,
//! URLs, addresses and LDS ordinances.

use super::DateValue;

gramps_element! {
    /// A bare reference carrying only the handle of its target.
    ///
    /// Used for `noteref`, `citationref`, `tagref`, `childof`, `parentin`,
    /// `father`, `mother`, `sourceref`, `sealed_to` and an event's `place`.
    pub struct HandleRef {
        attributes {
            req hlink: String = "hlink",
        }
        children {}
    }
}

impl HandleRef {
    pub fn new(hlink: impl Into<String>) -> Self {
        Self { hlink: hlink.into() }
    }
}

gramps_element! {
    /// A typed key/value fact, e.g. `type="Nickname"`.
    pub struct Attribute {
        attributes {
            opt private: Option<bool> = "priv",
            req r#type: String = "type",
            req value: String = "value",
        }
        children {
            many citationrefs: Vec<HandleRef> = "citationref",
            many noterefs: Vec<HandleRef> = "noteref",
        }
    }
}

gramps_element! {
    /// A key/value fact attached to a source or citation.
    pub struct SrcAttribute {
        attributes {
            opt private: Option<bool> = "priv",
            req r#type: String = "type",
            req value: String = "value",
        }
        children {}
    }
}

gramps_element! {
    pub struct Url {
        attributes {
            opt private: Option<bool> = "priv",
            opt r#type: Option<String> = "type",
            req href: String = "href",
            opt description: Option<String> = "description",
        }
        children {}
    }
}

gramps_element! {
    /// A postal address of a person or repository.
    pub struct Address {
        attributes {
            opt private: Option<bool> = "priv",
        }
        children {
            choice date: Option<DateValue>,
            opt street: Option<String> = "street",
            opt locality: Option<String> = "locality",
            opt city: Option<String> = "city",
            opt county: Option<String> = "county",
            opt state: Option<String> = "state",
            opt country: Option<String> = "country",
            opt postal: Option<String> = "postal",
            opt phone: Option<String> = "phone",
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
        }
    }
}

gramps_element! {
    /// A reference to an event together with the role played in it.
    pub struct EventRef {
        attributes {
            req hlink: String = "hlink",
            opt private: Option<bool> = "priv",
            opt role: Option<String> = "role",
        }
        children {
            many attributes: Vec<Attribute> = "attribute",
            many noterefs: Vec<HandleRef> = "noteref",
        }
    }
}

gramps_element! {
    /// A reference from a source to the repository holding it.
    pub struct RepoRef {
        attributes {
            req hlink: String = "hlink",
            opt private: Option<bool> = "priv",
            opt callno: Option<String> = "callno",
            opt medium: Option<String> = "medium",
        }
        children {
            many noterefs: Vec<HandleRef> = "noteref",
        }
    }
}

gramps_element! {
    /// The `val` of an ordinance `<temple>` or `<status>`.
    pub struct LdsValue {
        attributes {
            req val: String = "val",
        }
        children {}
    }
}

gramps_element! {
    /// A Latter-day Saints ordinance of a person or family.
    pub struct LdsOrd {
        attributes {
            opt private: Option<bool> = "priv",
            req r#type: String = "type",
        }
        children {
            choice date: Option<DateValue>,
            opt temple: Option<LdsValue> = "temple",
            opt place: Option<HandleRef> = "place",
            opt status: Option<LdsValue> = "status",
            opt sealed_to: Option<HandleRef> = "sealed_to",
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
        }
    }
}
