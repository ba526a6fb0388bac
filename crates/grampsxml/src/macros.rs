//! Declarative mapping of model structs onto Gramps XML elements.
//!
//! [`gramps_element!`] declares a struct and derives its
//! [`XmlElement`](crate::xml::XmlElement) implementation from a field table.
//!
//! Attribute fields carry one of two cardinalities:
//!
//! | keyword | field type  | absent in XML            |
//! |---------|-------------|--------------------------|
//! | `req`   | `T`         | `T::default()`           |
//! | `opt`   | `Option<T>` | `None`                   |
//!
//! Child fields carry one of four:
//!
//! | keyword  | field type  | XML                                         |
//! |----------|-------------|---------------------------------------------|
//! | `one`    | `T`         | exactly one `<tag>` (default when absent)   |
//! | `opt`    | `Option<T>` | zero or one `<tag>`                         |
//! | `many`   | `Vec<T>`    | zero or more `<tag>`, source order kept     |
//! | `choice` | `Option<T>` | zero or one of the tags accepted by `T`     |
//!
//! Children are written back in declaration order, which follows the DTD.

macro_rules! gramps_element {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            attributes {
                $( $(#[$ameta:meta])* $acard:ident $afield:ident : $aty:ty = $atag:literal ),* $(,)?
            }
            children {
                $( $(#[$cmeta:meta])* $ccard:ident $cfield:ident : $cty:ty $(= $ctag:literal)? ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $( $(#[$ameta])* pub $afield: $aty, )*
            $( $(#[$cmeta])* pub $cfield: $cty, )*
        }

        impl $crate::xml::XmlElement for $name {
            #[allow(unused_variables, unused_mut)]
            fn read_xml<R: std::io::BufRead>(
                reader: &mut $crate::xml::de::XmlReader<R>,
                start: &quick_xml::events::BytesStart<'_>,
                empty: bool,
            ) -> $crate::error::Result<Self> {
                $( let mut $afield = attr_slot!($acard $aty); )*
                for (key, value) in reader.attributes(start)? {
                    match key.as_str() {
                        $(
                            $atag => {
                                $afield = Some(
                                    $crate::xml::AttrValue::parse_attr(&value)
                                        .map_err(|e| reader.invalid_attribute($atag, &value, e))?,
                                );
                            }
                        )*
                        _ => reader.ignore_attribute(start, &key),
                    }
                }

                $( let mut $cfield = child_slot!($ccard $cty); )*
                if !empty {
                    while let Some((child, child_empty)) = reader.next_child()? {
                        let tag = child.local_name();
                        let tag = tag.as_ref();
                        $(
                            if child_matches!($ccard $cfield, tag $(, $ctag)?) {
                                child_store!($ccard reader, $cfield, &child, child_empty, tag);
                                continue;
                            }
                        )*
                        return Err(reader.unexpected_element(tag, start));
                    }
                }

                Ok(Self {
                    $( $afield: slot_finish!($acard $afield), )*
                    $( $cfield: slot_finish!($ccard $cfield), )*
                })
            }

            #[allow(unused_mut)]
            fn write_xml<W: std::io::Write>(
                &self,
                writer: &mut $crate::xml::ser::XmlWriter<W>,
                tag: &str,
            ) -> $crate::error::Result<()> {
                let mut start = quick_xml::events::BytesStart::new(tag);
                $( attr_write!($acard start, self.$afield, $atag); )*

                let has_children = false $( || child_present!($ccard self.$cfield) )*;
                if !has_children {
                    return writer.write_empty(start);
                }

                writer.write_start(start)?;
                $( child_write!($ccard writer, self.$cfield $(, $ctag)?); )*
                writer.write_end(tag)
            }
        }
    };
}

macro_rules! attr_slot {
    (req $ty:ty) => {
        None::<$ty>
    };
    (opt $ty:ty) => {
        <$ty as Default>::default()
    };
}

macro_rules! child_slot {
    (one $ty:ty) => {
        None::<$ty>
    };
    ($card:ident $ty:ty) => {
        <$ty as Default>::default()
    };
}

macro_rules! slot_finish {
    (req $slot:ident) => {
        $slot.unwrap_or_default()
    };
    (one $slot:ident) => {
        $slot.unwrap_or_default()
    };
    ($card:ident $slot:ident) => {
        $slot
    };
}

macro_rules! child_matches {
    (choice $slot:ident, $tag:ident) => {
        $crate::xml::choice_accepts(&$slot, $tag)
    };
    ($card:ident $slot:ident, $tag:ident, $expected:literal) => {
        $tag == $expected.as_bytes()
    };
}

macro_rules! child_store {
    (many $reader:ident, $slot:ident, $child:expr, $empty:ident, $tag:ident) => {
        $slot.push($crate::xml::XmlElement::read_xml($reader, $child, $empty)?)
    };
    (choice $reader:ident, $slot:ident, $child:expr, $empty:ident, $tag:ident) => {{
        if $slot.is_some() {
            return Err($reader.duplicate_element($tag, "more than one date"));
        }
        $slot = Some($crate::xml::XmlChoice::read_choice($reader, $child, $empty)?);
    }};
    ($card:ident $reader:ident, $slot:ident, $child:expr, $empty:ident, $tag:ident) => {{
        if $slot.is_some() {
            return Err($reader.duplicate_element($tag, "element may appear at most once"));
        }
        $slot = Some($crate::xml::XmlElement::read_xml($reader, $child, $empty)?);
    }};
}

macro_rules! attr_write {
    (req $start:ident, $value:expr, $tag:literal) => {
        $start.push_attribute(($tag, &*$crate::xml::AttrValue::format_attr(&$value)))
    };
    (opt $start:ident, $value:expr, $tag:literal) => {
        if let Some(value) = &$value {
            $start.push_attribute(($tag, &*$crate::xml::AttrValue::format_attr(value)));
        }
    };
}

macro_rules! child_present {
    (one $value:expr) => {
        true
    };
    (many $value:expr) => {
        !$value.is_empty()
    };
    ($card:ident $value:expr) => {
        $value.is_some()
    };
}

macro_rules! child_write {
    (one $writer:ident, $value:expr, $tag:literal) => {
        $crate::xml::XmlElement::write_xml(&$value, $writer, $tag)?
    };
    (opt $writer:ident, $value:expr, $tag:literal) => {
        if let Some(value) = &$value {
            $crate::xml::XmlElement::write_xml(value, $writer, $tag)?;
        }
    };
    (many $writer:ident, $value:expr, $tag:literal) => {
        for value in &$value {
            $crate::xml::XmlElement::write_xml(value, $writer, $tag)?;
        }
    };
    (choice $writer:ident, $value:expr) => {
        if let Some(value) = &$value {
            $crate::xml::XmlChoice::write_choice(value, $writer)?;
        }
    };
}
