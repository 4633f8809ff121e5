//! Built-in name lists used to label entity spans. All entries are
//! lowercase; multi-word entries are joined with single spaces.

use std::sync::LazyLock;

use ahash::AHashSet;

const GIVEN_NAMES: &[&str] = &[
    "ada", "alan", "albert", "ali", "angela", "anna", "barack", "bill", "boris", "charles",
    "david", "donald", "elizabeth", "elon", "emma", "emmanuel", "george", "grace", "hillary",
    "isaac", "james", "jeff", "joe", "john", "joseph", "justin", "kamala", "linus", "liam",
    "margaret", "maria", "mark", "mary", "michael", "michelle", "narendra", "noah", "olivia",
    "paul", "peter", "richard", "robert", "sam", "sarah", "satya", "steve", "sundar", "taylor",
    "theresa", "thomas", "tim", "vladimir", "william", "xi",
];

const TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "president",
    "senator", "sir", "lady", "lord", "king", "queen", "prince", "princess", "governor",
    "minister", "chancellor", "pope", "saint", "st.",
];

const GEO_POLITICAL: &[&str] = &[
    // acronyms
    "usa", "us", "u.s.", "u.s.a.", "uk", "u.k.", "uae", "eu", "ussr", "prc",
    // continents and regions
    "africa", "america", "antarctica", "asia", "australia", "europe", "middle east",
    "north america", "south america", "latin america", "scandinavia",
    // countries
    "afghanistan", "argentina", "austria", "bangladesh", "belgium", "brazil", "britain",
    "canada", "chile", "china", "colombia", "cuba", "denmark", "egypt", "england", "ethiopia",
    "finland", "france", "germany", "ghana", "greece", "india", "indonesia", "iran", "iraq",
    "ireland", "israel", "italy", "japan", "kenya", "korea", "malaysia", "mexico", "morocco",
    "nepal", "netherlands", "new zealand", "nigeria", "north korea", "norway", "pakistan",
    "peru", "philippines", "poland", "portugal", "russia", "saudi arabia", "scotland",
    "singapore", "south africa", "south korea", "spain", "sri lanka", "sweden",
    "switzerland", "syria", "taiwan", "thailand", "turkey", "ukraine", "united kingdom",
    "united states", "united states of america", "vietnam", "wales",
    // states
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
    "delaware", "florida", "georgia", "hawaii", "idaho", "illinois", "indiana", "iowa",
    "kansas", "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan",
    "minnesota", "mississippi", "missouri", "montana", "nebraska", "nevada", "new hampshire",
    "new jersey", "new mexico", "new york", "north carolina", "north dakota", "ohio",
    "oklahoma", "oregon", "pennsylvania", "rhode island", "south carolina", "south dakota",
    "tennessee", "texas", "utah", "vermont", "virginia", "washington", "west virginia",
    "wisconsin", "wyoming",
    // cities
    "amsterdam", "athens", "bangkok", "beijing", "berlin", "boston", "brussels", "cairo",
    "chicago", "delhi", "dubai", "dublin", "geneva", "hong kong", "honolulu", "istanbul",
    "jakarta", "karachi", "lagos", "lahore", "lisbon", "london", "los angeles", "madrid",
    "melbourne", "moscow", "mumbai", "nairobi", "new delhi", "paris", "rome", "san francisco",
    "seattle", "seoul", "shanghai", "stockholm", "sydney", "tokyo", "toronto",
    "vienna", "warsaw",
];

const ORGANIZATIONS: &[&str] = &[
    "amazon", "anthropic", "apple", "cia", "deepmind", "facebook", "fbi", "google", "ibm",
    "intel", "meta", "microsoft", "nasa", "nato", "netflix", "nvidia", "openai", "samsung",
    "tesla", "twitter", "un", "unesco", "unicef", "who",
];

const ORGANIZATION_CUES: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "company", "co.", "ltd", "ltd.", "llc",
    "university", "college", "institute", "bank", "group", "association", "foundation",
    "agency", "department", "ministry", "council", "committee", "party", "times", "labs",
    "society", "organization", "commission", "airlines", "motors",
];

const LOCATION_CUES: &[&str] = &[
    "river", "mountain", "mountains", "mount", "ocean", "sea", "lake", "valley", "desert",
    "island", "islands", "bay", "gulf", "peninsula", "forest", "canyon",
];

const FACILITY_CUES: &[&str] = &[
    "airport", "bridge", "stadium", "tower", "station", "hospital", "museum", "hall",
    "square", "palace", "temple", "church", "cathedral", "library", "center", "centre",
];

fn set(words: &'static [&'static str]) -> AHashSet<&'static str> {
    words.iter().copied().collect()
}

pub static GIVEN_NAME_SET: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| set(GIVEN_NAMES));
pub static TITLE_SET: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| set(TITLES));
pub static GEO_POLITICAL_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| set(GEO_POLITICAL));
pub static ORGANIZATION_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| set(ORGANIZATIONS));
pub static ORGANIZATION_CUE_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| set(ORGANIZATION_CUES));
pub static LOCATION_CUE_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| set(LOCATION_CUES));
pub static FACILITY_CUE_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| set(FACILITY_CUES));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_lowercase() {
        for list in [
            GIVEN_NAMES,
            TITLES,
            GEO_POLITICAL,
            ORGANIZATIONS,
            ORGANIZATION_CUES,
            LOCATION_CUES,
            FACILITY_CUES,
        ] {
            for entry in list {
                assert_eq!(*entry, entry.to_lowercase());
            }
        }
    }

    #[test]
    fn test_lookups() {
        assert!(GIVEN_NAME_SET.contains("barack"));
        assert!(GEO_POLITICAL_SET.contains("hawaii"));
        assert!(GEO_POLITICAL_SET.contains("usa"));
        assert!(GEO_POLITICAL_SET.contains("united states"));
        assert!(ORGANIZATION_SET.contains("openai"));
        assert!(!GEO_POLITICAL_SET.contains("obama"));
    }
}
