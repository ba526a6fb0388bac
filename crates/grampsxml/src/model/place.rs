use super::{DateValue, HandleRef, ObjRef, Url};

gramps_element! {
    /// A place record, `<placeobj>`.
    ///
    /// Places form a hierarchy through [`PlaceRef`]s to their enclosing places.
    pub struct PlaceObj {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
            req r#type: String = "type",
        }
        children {
            opt ptitle: Option<String> = "ptitle",
            many pnames: Vec<PlaceName> = "pname",
            opt code: Option<String> = "code",
            opt coord: Option<Coord> = "coord",
            many placerefs: Vec<PlaceRef> = "placeref",
            many locations: Vec<Location> = "location",
            many objrefs: Vec<ObjRef> = "objref",
            many urls: Vec<Url> = "url",
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}

gramps_element! {
    /// A name of a place, possibly limited to a language or period.
    pub struct PlaceName {
        attributes {
            opt lang: Option<String> = "lang",
            req value: String = "value",
        }
        children {
            choice date: Option<DateValue>,
        }
    }
}

gramps_element! {
    /// Coordinates exactly as written; Gramps allows several notations.
    pub struct Coord {
        attributes {
            req long: String = "long",
            req lat: String = "lat",
        }
        children {}
    }
}

gramps_element! {
    pub struct Location {
        attributes {
            opt street: Option<String> = "street",
            opt locality: Option<String> = "locality",
            opt city: Option<String> = "city",
            opt parish: Option<String> = "parish",
            opt county: Option<String> = "county",
            opt state: Option<String> = "state",
            opt country: Option<String> = "country",
            opt postal: Option<String> = "postal",
            opt phone: Option<String> = "phone",
        }
        children {}
    }
}

gramps_element! {
    /// A reference to an enclosing place, optionally bounded in time.
    pub struct PlaceRef {
        attributes {
            req hlink: String = "hlink",
        }
        children {
            choice date: Option<DateValue>,
        }
    }
}
