use crate::normalize_email;

use googletest::prelude::*;

#[test]
fn given_padded_mixed_case_email_when_normalized_then_trimmed_and_lowercased() {
    assert_that!(normalize_email("  User@Foo.COM\t"), eq("user@foo.com"));
}

#[test]
fn given_non_ascii_uppercase_when_normalized_then_folded() {
    assert_that!(normalize_email("ÉLODIE@Foo.com"), eq("élodie@foo.com"));
    assert_that!(
        normalize_email("ÅSA@example.com"),
        eq(&normalize_email("åsa@EXAMPLE.com"))
    );
}
