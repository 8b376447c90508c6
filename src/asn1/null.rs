//! `NULL` decoding (`spec.md` §4.3).

use crate::{Error, ErrorKind, Length, Token};

/// Decode an ASN.1 `NULL` token.
///
/// Fails with [`ErrorKind::Malformed`] if the content is non-empty.
pub fn decode_null(token: &Token<'_>) -> Result<(), Error> {
    if token.data.is_empty() {
        Ok(())
    } else {
        Err(ErrorKind::Malformed {
            tag: Some(token.tag),
        }
        .at(Length::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, Tag};

    fn null_tag() -> Tag {
        Tag {
            class: Class::Universal,
            constructed: false,
            number: crate::tag::NULL,
        }
    }

    #[test]
    fn empty_content_decodes() {
        assert!(decode_null(&Token::new(null_tag(), &[])).is_ok());
    }

    #[test]
    fn non_empty_content_is_malformed() {
        assert!(decode_null(&Token::new(null_tag(), &[0])).is_err());
    }
}
