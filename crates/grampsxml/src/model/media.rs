use super::{Attribute, DateValue, HandleRef};

gramps_element! {
    /// A media object record, `<object>`.
    pub struct MediaObject {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            one file: File = "file",
            many attributes: Vec<Attribute> = "attribute",
            many noterefs: Vec<HandleRef> = "noteref",
            choice date: Option<DateValue>,
            many citationrefs: Vec<HandleRef> = "citationref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}

gramps_element! {
    /// Location and type of the media file, relative to the header's media path.
    pub struct File {
        attributes {
            req src: String = "src",
            req mime: String = "mime",
            opt checksum: Option<String> = "checksum",
            req description: String = "description",
        }
        children {}
    }
}

gramps_element! {
    /// A reference to a media object, optionally cropped to a region.
    pub struct ObjRef {
        attributes {
            req hlink: String = "hlink",
            opt private: Option<bool> = "priv",
        }
        children {
            opt region: Option<Region> = "region",
            many attributes: Vec<Attribute> = "attribute",
            many citationrefs: Vec<HandleRef> = "citationref",
            many noterefs: Vec<HandleRef> = "noteref",
        }
    }
}

gramps_element! {
    /// Corners of a region in percent of the image size.
    pub struct Region {
        attributes {
            opt corner1_x: Option<i32> = "corner1_x",
            opt corner1_y: Option<i32> = "corner1_y",
            opt corner2_x: Option<i32> = "corner2_x",
            opt corner2_y: Option<i32> = "corner2_y",
        }
        children {}
    }
}
