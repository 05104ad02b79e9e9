//! SEO copy: titles, descriptions and keywords per page and locale.
//!
//! One `SiteCopy` table exists per locale and is looked up by locale code,
//! so the metadata builder never branches on a language.

/// Search and social copy for a single page.
#[derive(Debug, Clone, Copy)]
pub struct PageCopy {
    /// `<title>` and social card title
    pub title: &'static str,

    /// Meta description (search results)
    pub description: &'static str,

    /// Comma-separated meta keywords; empty means no keywords tag
    pub keywords: &'static str,

    /// Shorter description used for Open Graph and Twitter cards
    pub social_description: &'static str,
}

/// All SEO copy for one locale.
#[derive(Debug, Clone, Copy)]
pub struct SiteCopy {
    /// Open Graph `site_name`
    pub site_name: &'static str,

    pub home: PageCopy,
    pub help: PageCopy,
    pub privacy: PageCopy,
    pub terms: PageCopy,
    pub not_found: PageCopy,
}

// ==================== English Copy ====================

pub const ENGLISH_COPY: SiteCopy = SiteCopy {
    site_name: "Abicus Calculator",

    home: PageCopy {
        title: "Abicus - Scientific Calculator Online",
        description: "Free online scientific calculator based on the Finnish Abicus calculator. \
Perfect for mathematical calculations, homework, and educational purposes.",
        keywords: "abicus, calculator, scientific calculator, online calculator, math calculator, \
Finnish calculator, educational calculator",
        social_description: "Free online scientific calculator for educational purposes.",
    },

    help: PageCopy {
        title: "Help & Tips - Abicus Scientific Calculator",
        description: "Learn how to use the Abicus calculator effectively. Keyboard shortcuts, \
available functions, and pro tips.",
        keywords: "abicus help, calculator usage, keyboard shortcuts, scientific calculator functions, \
calculator tips",
        social_description: "Learn how to use the Abicus calculator effectively.",
    },

    privacy: PageCopy {
        title: "Privacy Policy - Abicus Scientific Calculator",
        description: "Read the Abicus calculator privacy policy. Information about how we collect, \
use, and protect your data.",
        keywords: "abicus privacy, privacy policy, data protection, cookies, security",
        social_description: "Read the Abicus calculator privacy policy.",
    },

    terms: PageCopy {
        title: "Terms of Service - Abicus Scientific Calculator",
        description: "Read the Abicus calculator terms of service. Terms and conditions for using \
the service.",
        keywords: "abicus terms, terms of service, terms and conditions, calculator usage",
        social_description: "Read the Abicus calculator terms of service.",
    },

    not_found: PageCopy {
        title: "Page Not Found - Abicus Scientific Calculator",
        description: "The page you are looking for could not be found. Return to the Abicus calculator.",
        keywords: "",
        social_description: "The page you are looking for could not be found.",
    },
};

// ==================== Finnish Copy ====================

pub const FINNISH_COPY: SiteCopy = SiteCopy {
    site_name: "Abicus Calculator",

    home: PageCopy {
        title: "Abicus - Tieteislaskin Verkossa",
        description: "Ilmainen verkossa toimiva tieteislaskin, joka perustuu suomalaiseen \
Abicus-laskimeen. Täydellinen matemaattisiin laskutoimituksiin, kotitehtäviin ja opetuskäyttöön.",
        keywords: "abicus, laskin, tieteislaskin, verkkolaskin, matikkalaskin, suomalainen laskin, \
opetuslaskin",
        social_description: "Ilmainen verkossa toimiva tieteislaskin opetuskäyttöön.",
    },

    help: PageCopy {
        title: "Ohje ja Vinkit - Abicus Tieteislaskin",
        description: "Opi käyttämään Abicus-laskinta tehokkaasti. Näppäimistöpikakuvakkeet, \
käytettävissä olevat funktiot ja profi vinkit.",
        keywords: "abicus ohje, laskimen käyttö, näppäimistöpikakuvakkeet, tieteislaskimen funktiot, \
laskimen vinkit",
        social_description: "Opi käyttämään Abicus-laskinta tehokkaasti.",
    },

    privacy: PageCopy {
        title: "Tietosuojakäytäntö - Abicus Tieteislaskin",
        description: "Lue Abicus-laskimen tietosuojakäytäntö. Tietoja siitä, kuinka keräämme, \
käytämme ja suojaamme tietojasi.",
        keywords: "abicus tietosuoja, yksityisyys, tietosuojakäytäntö, evästeet, tietoturva",
        social_description: "Lue Abicus-laskimen tietosuojakäytäntö.",
    },

    terms: PageCopy {
        title: "Käyttöehdot - Abicus Tieteislaskin",
        description: "Lue Abicus-laskimen käyttöehdot. Ehdot ja määräykset palvelun käytölle.",
        keywords: "abicus käyttöehdot, käyttöehdot, palveluehdot, laskimen käyttö",
        social_description: "Lue Abicus-laskimen käyttöehdot.",
    },

    not_found: PageCopy {
        title: "Sivua ei löytynyt - Abicus Tieteislaskin",
        description: "Etsimääsi sivua ei löytynyt. Palaa takaisin Abicus-laskimeen.",
        keywords: "",
        social_description: "Etsimääsi sivua ei löytynyt.",
    },
};

const COPY_TABLE: &[(&str, &SiteCopy)] = &[("en", &ENGLISH_COPY), ("fi", &FINNISH_COPY)];

/// Copy table for a locale code; unknown codes get English.
pub fn site_copy(code: &str) -> &'static SiteCopy {
    COPY_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, copy)| *copy)
        .unwrap_or(&ENGLISH_COPY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn pages(copy: &SiteCopy) -> [PageCopy; 5] {
        [copy.home, copy.help, copy.privacy, copy.terms, copy.not_found]
    }

    #[test]
    fn test_every_locale_has_a_copy_table() {
        for locale in Locale::all() {
            assert!(
                COPY_TABLE.iter().any(|(code, _)| *code == locale.code()),
                "no copy for {}",
                locale
            );
        }
    }

    #[test]
    fn test_site_copy_lookup() {
        assert_eq!(site_copy("fi").home.title, "Abicus - Tieteislaskin Verkossa");
        assert_eq!(site_copy("en").home.title, "Abicus - Scientific Calculator Online");
    }

    #[test]
    fn test_site_copy_unknown_code_is_english() {
        assert_eq!(site_copy("sv").help.title, ENGLISH_COPY.help.title);
    }

    #[test]
    fn test_titles_and_descriptions_not_empty() {
        for copy in [&ENGLISH_COPY, &FINNISH_COPY] {
            for page in pages(copy) {
                assert!(!page.title.is_empty());
                assert!(!page.description.is_empty());
                assert!(!page.social_description.is_empty());
            }
        }
    }

    #[test]
    fn test_finnish_titles_differ_from_english() {
        for (en, fi) in pages(&ENGLISH_COPY).iter().zip(pages(&FINNISH_COPY).iter()) {
            assert_ne!(en.title, fi.title);
        }
    }

    #[test]
    fn test_not_found_has_no_keywords() {
        assert!(ENGLISH_COPY.not_found.keywords.is_empty());
        assert!(FINNISH_COPY.not_found.keywords.is_empty());
    }
}
