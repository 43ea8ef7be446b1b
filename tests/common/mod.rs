//! Shared fixtures: a four-message bundle in English and German and the
//! documents each codec writes for it at 2019-12-31T16:00:00Z.

#![allow(dead_code)]

use arbcodec::{Codec, FixedClock};
use chrono::DateTime;
use indoc::indoc;

pub const NOW: &str = "2019-12-31T16:00:00.000Z";

pub fn clock() -> FixedClock {
    FixedClock::new(DateTime::parse_from_rfc3339("2019-12-31T16:00:00+00:00").unwrap())
}

pub fn codec() -> Codec<FixedClock> {
    Codec::with_clock(clock())
}

pub const SOURCE_ARB: &str = indoc! {r#"
    {
      "@@locale": "en_US",
      "@@last_modified": "2019-12-31T16:00:00.000Z",
      "simple": "Super simple",
      "@simple": {
        "description": "",
        "type": "text",
        "placeholders": {}
      },
      "param": "Walk {distance}",
      "@param": {
        "description": "Walking instruction",
        "type": "text",
        "placeholders": {
          "distance": {
            "example": "500 m"
          }
        }
      },
      "long": "Very long string that exceeds the max char limit of 80 characters easily and thus forces a line break in the resulting PO file",
      "@long": {
        "description": "We need to test long comments as well, so this is me wasting time by writing something meaningful. Did you really read this to the end?",
        "type": "text",
        "placeholders": {}
      },
      "longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey": "But a short string :D",
      "@longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey": {
        "description": "Well, also the key might be very long and need to be broken to multiple lines",
        "type": "text",
        "placeholders": {}
      }
    }"#};

pub const TARGET_ARB: &str = indoc! {r#"
    {
      "@@locale": "de_DE",
      "@@last_modified": "2019-12-31T16:00:00.000Z",
      "simple": "Super simpel",
      "@simple": {
        "description": "",
        "type": "text",
        "placeholders": {}
      },
      "param": "Laufe {distance}",
      "@param": {
        "description": "Walking instruction",
        "type": "text",
        "placeholders": {
          "distance": {
            "example": "500 m"
          }
        }
      },
      "long": "Ein sehr langer String der problemlos das maximale Zeichenlimit von 80 Zeichen überschreitet und damit einen Zeilenumbruch in der resultierenden PO-Datei erwingt",
      "@long": {
        "description": "We need to test long comments as well, so this is me wasting time by writing something meaningful. Did you really read this to the end?",
        "type": "text",
        "placeholders": {}
      },
      "longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey": "Aber eine kurze Zeichenkette :D",
      "@longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey": {
        "description": "Well, also the key might be very long and need to be broken to multiple lines",
        "type": "text",
        "placeholders": {}
      }
    }"#};

pub const PO_EMPTY: &str = concat!(
    "# Translation converted from ARB\n",
    "# original: application resource bundle\n",
    "# srcLang: en-US\n",
    "# trgLang: \n",
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"PO-Revision-Date: 2019-12-31 16:00+0000\"\n",
    "\"MIME-Version: 1.0\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\"\n",
    "\"Content-Transfer-Encoding: 8bit\"\n",
);

pub const PO_SOURCE_ONLY: &str = concat!(
    "# Translation converted from ARB\n",
    "# original: some ns\n",
    "# srcLang: en-US\n",
    "# trgLang: \n",
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"PO-Revision-Date: 2019-12-31 16:00+0000\"\n",
    "\"MIME-Version: 1.0\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\"\n",
    "\"Content-Transfer-Encoding: 8bit\"\n",
    "\n",
    "msgctxt \"simple\"\n",
    "msgid \"Super simple\"\n",
    "msgstr \"\"\n",
    "\n",
    "#. Walking instruction\n",
    "#. {distance} example: 500 m\n",
    "msgctxt \"param\"\n",
    "msgid \"Walk {distance}\"\n",
    "msgstr \"\"\n",
    "\n",
    "#. We need to test long comments as well, so this is me wasting time by writing \n",
    "#. something meaningful. Did you really read this to the end?\n",
    "msgctxt \"long\"\n",
    "msgid \"\"\n",
    "\"Very long string that exceeds the max char limit of 80 characters easily and t\"\n",
    "\"hus forces a line break in the resulting PO file\"\n",
    "msgstr \"\"\n",
    "\n",
    "#. Well, also the key might be very long and need to be broken to multiple lines\n",
    "msgctxt \"\"\n",
    "\"longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglo\"\n",
    "\"ngkey\"\n",
    "msgid \"But a short string :D\"\n",
    "msgstr \"\"\n",
);

pub const PO_WITH_TARGET: &str = concat!(
    "# Translation converted from ARB\n",
    "# original: some ns\n",
    "# srcLang: en-US\n",
    "# trgLang: de-DE\n",
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"PO-Revision-Date: 2019-12-31 16:00+0000\"\n",
    "\"MIME-Version: 1.0\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\"\n",
    "\"Content-Transfer-Encoding: 8bit\"\n",
    "\n",
    "msgctxt \"simple\"\n",
    "msgid \"Super simple\"\n",
    "msgstr \"Super simpel\"\n",
    "\n",
    "#. Walking instruction\n",
    "#. {distance} example: 500 m\n",
    "msgctxt \"param\"\n",
    "msgid \"Walk {distance}\"\n",
    "msgstr \"Laufe {distance}\"\n",
    "\n",
    "#. We need to test long comments as well, so this is me wasting time by writing \n",
    "#. something meaningful. Did you really read this to the end?\n",
    "msgctxt \"long\"\n",
    "msgid \"\"\n",
    "\"Very long string that exceeds the max char limit of 80 characters easily and t\"\n",
    "\"hus forces a line break in the resulting PO file\"\n",
    "msgstr \"\"\n",
    "\"Ein sehr langer String der problemlos das maximale Zeichenlimit von 80 Zeichen\"\n",
    "\" überschreitet und damit einen Zeilenumbruch in der resultierenden PO-Datei er\"\n",
    "\"wingt\"\n",
    "\n",
    "#. Well, also the key might be very long and need to be broken to multiple lines\n",
    "msgctxt \"\"\n",
    "\"longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglo\"\n",
    "\"ngkey\"\n",
    "msgid \"But a short string :D\"\n",
    "msgstr \"Aber eine kurze Zeichenkette :D\"\n",
);

pub const XLIFF_1_2_SOURCE_ONLY: &str = indoc! {r#"
    <xliff xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="urn:oasis:names:tc:xliff:document:1.2 http://docs.oasis-open.org/xliff/v1.2/os/xliff-core-1.2-strict.xsd" xmlns="urn:oasis:names:tc:xliff:document:1.2" version="1.2">
      <file original="some ns" datatype="plaintext" xml:space="preserve" source-language="en-US" date="2019-12-31T16:00:00.000Z">
        <body>
          <trans-unit id="simple">
            <source>Super simple</source>
          </trans-unit>
          <trans-unit id="param">
            <source>Walk {distance}</source>
            <note from="developer">Walking instruction</note>
            <context-group purpose="informational">
              <context context-type="paramnotes">{distance} example: 500 m</context>
            </context-group>
          </trans-unit>
          <trans-unit id="long">
            <source>Very long string that exceeds the max char limit of 80 characters easily and thus forces a line break in the resulting PO file</source>
            <note from="developer">We need to test long comments as well, so this is me wasting time by writing something meaningful. Did you really read this to the end?</note>
          </trans-unit>
          <trans-unit id="longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey">
            <source>But a short string :D</source>
            <note from="developer">Well, also the key might be very long and need to be broken to multiple lines</note>
          </trans-unit>
        </body>
      </file>
    </xliff>"#};

pub const XLIFF_1_2_WITH_TARGET: &str = indoc! {r#"
    <xliff xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="urn:oasis:names:tc:xliff:document:1.2 http://docs.oasis-open.org/xliff/v1.2/os/xliff-core-1.2-strict.xsd" xmlns="urn:oasis:names:tc:xliff:document:1.2" version="1.2">
      <file original="some ns" datatype="plaintext" xml:space="preserve" source-language="en-US" target-language="de-DE" date="2019-12-31T16:00:00.000Z">
        <body>
          <trans-unit id="simple">
            <source>Super simple</source>
            <target>Super simpel</target>
          </trans-unit>
          <trans-unit id="param">
            <source>Walk {distance}</source>
            <target>Laufe {distance}</target>
            <note from="developer">Walking instruction</note>
            <context-group purpose="informational">
              <context context-type="paramnotes">{distance} example: 500 m</context>
            </context-group>
          </trans-unit>
          <trans-unit id="long">
            <source>Very long string that exceeds the max char limit of 80 characters easily and thus forces a line break in the resulting PO file</source>
            <target>Ein sehr langer String der problemlos das maximale Zeichenlimit von 80 Zeichen überschreitet und damit einen Zeilenumbruch in der resultierenden PO-Datei erwingt</target>
            <note from="developer">We need to test long comments as well, so this is me wasting time by writing something meaningful. Did you really read this to the end?</note>
          </trans-unit>
          <trans-unit id="longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey">
            <source>But a short string :D</source>
            <target>Aber eine kurze Zeichenkette :D</target>
            <note from="developer">Well, also the key might be very long and need to be broken to multiple lines</note>
          </trans-unit>
        </body>
      </file>
    </xliff>"#};

pub const XLIFF_2_SOURCE_ONLY: &str = indoc! {r#"
    <xliff xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="urn:oasis:names:tc:xliff:document:2.0 http://docs.oasis-open.org/xliff/xliff-core/v2.1/cos02/schemas/xliff_core_2.0.xsd" xmlns="urn:oasis:names:tc:xliff:document:2.0" version="2.0" srcLang="en-US">
      <file id="arb" original="some ns" xml:space="preserve">
        <unit id="simple">
          <segment>
            <source>Super simple</source>
          </segment>
        </unit>
        <unit id="param">
          <notes>
            <note category="description">Walking instruction</note>
            <note category="placeholder">{distance} example: 500 m</note>
          </notes>
          <segment>
            <source>Walk {distance}</source>
          </segment>
        </unit>
        <unit id="long">
          <notes>
            <note category="description">We need to test long comments as well, so this is me wasting time by writing something meaningful. Did you really read this to the end?</note>
          </notes>
          <segment>
            <source>Very long string that exceeds the max char limit of 80 characters easily and thus forces a line break in the resulting PO file</source>
          </segment>
        </unit>
        <unit id="longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey">
          <notes>
            <note category="description">Well, also the key might be very long and need to be broken to multiple lines</note>
          </notes>
          <segment>
            <source>But a short string :D</source>
          </segment>
        </unit>
      </file>
    </xliff>"#};

pub const XLIFF_2_WITH_TARGET: &str = indoc! {r#"
    <xliff xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="urn:oasis:names:tc:xliff:document:2.0 http://docs.oasis-open.org/xliff/xliff-core/v2.1/cos02/schemas/xliff_core_2.0.xsd" xmlns="urn:oasis:names:tc:xliff:document:2.0" version="2.0" srcLang="en-US" trgLang="de-DE">
      <file id="arb" original="some ns" xml:space="preserve">
        <unit id="simple">
          <segment>
            <source>Super simple</source>
            <target>Super simpel</target>
          </segment>
        </unit>
        <unit id="param">
          <notes>
            <note category="description">Walking instruction</note>
            <note category="placeholder">{distance} example: 500 m</note>
          </notes>
          <segment>
            <source>Walk {distance}</source>
            <target>Laufe {distance}</target>
          </segment>
        </unit>
        <unit id="long">
          <notes>
            <note category="description">We need to test long comments as well, so this is me wasting time by writing something meaningful. Did you really read this to the end?</note>
          </notes>
          <segment>
            <source>Very long string that exceeds the max char limit of 80 characters easily and thus forces a line break in the resulting PO file</source>
            <target>Ein sehr langer String der problemlos das maximale Zeichenlimit von 80 Zeichen überschreitet und damit einen Zeilenumbruch in der resultierenden PO-Datei erwingt</target>
          </segment>
        </unit>
        <unit id="longlonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglonglongkey">
          <notes>
            <note category="description">Well, also the key might be very long and need to be broken to multiple lines</note>
          </notes>
          <segment>
            <source>But a short string :D</source>
            <target>Aber eine kurze Zeichenkette :D</target>
          </segment>
        </unit>
      </file>
    </xliff>"#};
