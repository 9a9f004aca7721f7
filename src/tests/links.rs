use super::*;

#[test]
fn inline_link() {
    events(
        "[foo](/url)",
        concat!(
            "link 0..11\n",
            "  label 0..5\n",
            "    labelMarker 0..1\n",
            "    labelText 1..4\n",
            "      data 1..4 \"foo\"\n",
            "    labelMarker 4..5\n",
            "  resource 5..11\n",
            "    resourceMarker 5..6\n",
            "    resourceDestination 6..10\n",
            "      resourceDestinationRaw 6..10\n",
            "        resourceDestinationString 6..10 \"/url\"\n",
            "    resourceMarker 10..11\n",
        ),
    );
}

#[test]
fn link_with_title() {
    events(
        "[a](/u \"t\")",
        concat!(
            "link 0..11\n",
            "  label 0..3\n",
            "    labelMarker 0..1\n",
            "    labelText 1..2\n",
            "      data 1..2 \"a\"\n",
            "    labelMarker 2..3\n",
            "  resource 3..11\n",
            "    resourceMarker 3..4\n",
            "    resourceDestination 4..6\n",
            "      resourceDestinationRaw 4..6\n",
            "        resourceDestinationString 4..6 \"/u\"\n",
            "    whitespace 6..7\n",
            "    resourceTitle 7..10\n",
            "      resourceTitleMarker 7..8\n",
            "      resourceTitleString 8..9 \"t\"\n",
            "      resourceTitleMarker 9..10\n",
            "    resourceMarker 10..11\n",
        ),
    );
}

#[test]
fn empty_resource() {
    events(
        "[a]()",
        concat!(
            "link 0..5\n",
            "  label 0..3\n",
            "    labelMarker 0..1\n",
            "    labelText 1..2\n",
            "      data 1..2 \"a\"\n",
            "    labelMarker 2..3\n",
            "  resource 3..5\n",
            "    resourceMarker 3..4\n",
            "    resourceMarker 4..5\n",
        ),
    );
}

#[test]
fn enclosed_destination() {
    events(
        "[a](<b c>)",
        concat!(
            "link 0..10\n",
            "  label 0..3\n",
            "    labelMarker 0..1\n",
            "    labelText 1..2\n",
            "      data 1..2 \"a\"\n",
            "    labelMarker 2..3\n",
            "  resource 3..10\n",
            "    resourceMarker 3..4\n",
            "    resourceDestination 4..9\n",
            "      resourceDestinationLiteral 4..9\n",
            "        resourceDestinationLiteralMarker 4..5\n",
            "        resourceDestinationString 5..8 \"b c\"\n",
            "        resourceDestinationLiteralMarker 8..9\n",
            "    resourceMarker 9..10\n",
        ),
    );
}

// A quote straight after the destination is part of the destination, not a
// title.
#[test]
fn title_needs_whitespace() {
    events(
        "[a](b\"c\")",
        concat!(
            "link 0..9\n",
            "  label 0..3\n",
            "    labelMarker 0..1\n",
            "    labelText 1..2\n",
            "      data 1..2 \"a\"\n",
            "    labelMarker 2..3\n",
            "  resource 3..9\n",
            "    resourceMarker 3..4\n",
            "    resourceDestination 4..8\n",
            "      resourceDestinationRaw 4..8\n",
            "        resourceDestinationString 4..8 \"b\\\"c\\\"\"\n",
            "    resourceMarker 8..9\n",
        ),
    );
}

#[test]
fn unterminated_resource() {
    events(
        "[a](b c",
        concat!(
            "data 0..1 \"[\"\n",
            "data 1..2 \"a\"\n",
            "data 2..3 \"]\"\n",
            "data 3..7 \"(b c\"\n",
        ),
    );
}

#[test]
fn resource_fails_but_shortcut_defined() {
    events_with(
        "[foo](b c",
        &["foo"],
        concat!(
            "link 0..5\n",
            "  label 0..5\n",
            "    labelMarker 0..1\n",
            "    labelText 1..4\n",
            "      data 1..4 \"foo\"\n",
            "    labelMarker 4..5\n",
            "data 5..9 \"(b c\"\n",
        ),
    );
}

#[test]
fn lone_close_bracket() {
    events(
        "a]b",
        concat!("data 0..1 \"a\"\n", "data 1..2 \"]\"\n", "data 2..3 \"b\"\n"),
    );
}

#[test]
fn escaped_open_bracket() {
    events(
        "\\[a](b)",
        concat!(
            "data 0..3 \"\\\\[a\"\n",
            "data 3..4 \"]\"\n",
            "data 4..7 \"(b)\"\n",
        ),
    );
}

#[test]
fn multiline_title() {
    events(
        "[a](/u \"x\ny\")",
        concat!(
            "link 0..13\n",
            "  label 0..3\n",
            "    labelMarker 0..1\n",
            "    labelText 1..2\n",
            "      data 1..2 \"a\"\n",
            "    labelMarker 2..3\n",
            "  resource 3..13\n",
            "    resourceMarker 3..4\n",
            "    resourceDestination 4..6\n",
            "      resourceDestinationRaw 4..6\n",
            "        resourceDestinationString 4..6 \"/u\"\n",
            "    whitespace 6..7\n",
            "    resourceTitle 7..12\n",
            "      resourceTitleMarker 7..8\n",
            "      resourceTitleString 8..11 \"x\\ny\"\n",
            "      resourceTitleMarker 11..12\n",
            "    resourceMarker 12..13\n",
        ),
    );
}
