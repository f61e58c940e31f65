//! Unconditional clause texts: § 11 Haftungsbeschränkung and § 12
//! Veränderungen am Mietgegenstand.

/// § 11 liability limitation.
pub fn liability_limitation() -> String {
    "(1) Die verschuldensunabhängige Haftung des Vermieters für anfängliche \
     Sachmängel des Mietgegenstandes gemäß § 536a Abs. 1 BGB wird ausgeschlossen.\n\n\
     (2) Im Übrigen haftet der Vermieter für Schäden des Mieters nur bei Vorsatz \
     und grober Fahrlässigkeit. Dies gilt nicht für Schäden aus der Verletzung \
     des Lebens, des Körpers oder der Gesundheit sowie für die Verletzung \
     wesentlicher Vertragspflichten."
        .to_string()
}

/// § 12 alterations to the rented property.
pub fn alterations() -> String {
    "(1) Veränderungen an und im Mietgegenstand, insbesondere Um- und Einbauten, \
     das Anbringen und Entfernen von Installationen und dgl. sind nur mit vorheriger \
     schriftlicher Zustimmung des Vermieters zulässig.\n\n\
     (2) Für weitere Veränderungen hat der Mieter vorher die Zustimmung des \
     Vermieters einzuholen. Dieser kann die Zustimmung davon abhängig machen, dass \
     der Mieter bei Beendigung des Mietverhältnisses den ursprünglichen Zustand \
     wiederherstellt."
        .to_string()
}
