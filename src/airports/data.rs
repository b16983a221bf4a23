//! Built-in table of curated US airports

use crate::models::Region;

/// `(iata, name, city, state, region, latitude, longitude)`
pub(crate) type AirportRow = (&'static str, &'static str, &'static str, &'static str, Region, f64, f64);

pub(crate) const AIRPORTS: &[AirportRow] = &[
    ("BOS", "Logan International Airport", "Boston", "MA", Region::Northeast, 42.3656, -71.0096),
    ("JFK", "John F. Kennedy International Airport", "New York", "NY", Region::Northeast, 40.6413, -73.7781),
    ("LGA", "LaGuardia Airport", "New York", "NY", Region::Northeast, 40.7769, -73.8740),
    ("EWR", "Newark Liberty International Airport", "Newark", "NJ", Region::Northeast, 40.6895, -74.1745),
    ("PHL", "Philadelphia International Airport", "Philadelphia", "PA", Region::Northeast, 39.8729, -75.2437),
    ("BWI", "Baltimore/Washington International Airport", "Baltimore", "MD", Region::Northeast, 39.1774, -76.6684),
    ("IAD", "Washington Dulles International Airport", "Washington", "DC", Region::Northeast, 38.9531, -77.4565),
    ("DCA", "Ronald Reagan Washington National Airport", "Washington", "DC", Region::Northeast, 38.8512, -77.0402),
    ("PWM", "Portland International Jetport", "Portland", "ME", Region::Northeast, 43.6462, -70.3093),
    ("BTV", "Burlington International Airport", "Burlington", "VT", Region::Northeast, 44.4719, -73.1533),
    ("ALB", "Albany International Airport", "Albany", "NY", Region::Northeast, 42.7483, -73.8017),
    ("SYR", "Syracuse Hancock International Airport", "Syracuse", "NY", Region::Northeast, 43.1112, -76.1063),

    ("LAX", "Los Angeles International Airport", "Los Angeles", "CA", Region::PacificCoast, 33.9416, -118.4085),
    ("SEA", "Seattle-Tacoma International Airport", "Seattle", "WA", Region::PacificCoast, 47.4502, -122.3088),
    ("SFO", "San Francisco International Airport", "San Francisco", "CA", Region::PacificCoast, 37.6213, -122.3790),
    ("SAN", "San Diego International Airport", "San Diego", "CA", Region::PacificCoast, 32.7338, -117.1933),
    ("LAS", "Harry Reid International Airport", "Las Vegas", "NV", Region::PacificCoast, 36.0840, -115.1537),
    ("PDX", "Portland International Airport", "Portland", "OR", Region::PacificCoast, 45.5898, -122.5951),
    ("SNA", "John Wayne Airport", "Santa Ana", "CA", Region::PacificCoast, 33.6757, -117.8682),
    ("SJC", "San Jose International Airport", "San Jose", "CA", Region::PacificCoast, 37.3626, -121.9290),
    ("SMF", "Sacramento International Airport", "Sacramento", "CA", Region::PacificCoast, 38.6954, -121.5908),
    ("BUR", "Hollywood Burbank Airport", "Burbank", "CA", Region::PacificCoast, 34.2006, -118.3587),
    ("OAK", "Oakland International Airport", "Oakland", "CA", Region::PacificCoast, 37.8044, -122.2712),
    ("BFL", "Bakersfield Municipal Airport", "Bakersfield", "CA", Region::PacificCoast, 35.4339, -119.0568),
    ("EUG", "Eugene Airport", "Eugene", "OR", Region::PacificCoast, 44.1246, -123.2120),
    ("RDM", "Redmond Municipal Airport", "Redmond", "OR", Region::PacificCoast, 44.2541, -121.1500),
    ("SPD", "Spokane International Airport", "Spokane", "WA", Region::PacificCoast, 47.6199, -117.5348),
    ("VGT", "North Las Vegas Airport", "Las Vegas", "NV", Region::PacificCoast, 36.2107, -115.1944),

    ("DEN", "Denver International Airport", "Denver", "CO", Region::RockyMountains, 39.8561, -104.6737),
    ("SLC", "Salt Lake City International Airport", "Salt Lake City", "UT", Region::RockyMountains, 40.7899, -111.9791),
    ("ABQ", "Albuquerque International Sunport", "Albuquerque", "NM", Region::RockyMountains, 35.0402, -106.6091),
    ("PHX", "Phoenix Sky Harbor International Airport", "Phoenix", "AZ", Region::RockyMountains, 33.4342, -112.0116),
    ("BOI", "Boise Airport", "Boise", "ID", Region::RockyMountains, 43.5644, -116.2228),
    ("BZN", "Bozeman Yellowstone International Airport", "Bozeman", "MT", Region::RockyMountains, 45.7776, -111.1528),
    ("BIL", "Billings Logan International Airport", "Billings", "MT", Region::RockyMountains, 45.8077, -108.5429),
    ("COS", "Colorado Springs Airport", "Colorado Springs", "CO", Region::RockyMountains, 38.8058, -104.7008),
    ("BUF", "Buffalo Niagara International Airport", "Buffalo", "NY", Region::RockyMountains, 42.9405, -78.7322),
    ("ASE", "Aspen/Pitkin County Airport", "Aspen", "CO", Region::RockyMountains, 39.2232, -106.8689),
    ("TUS", "Tucson International Airport", "Tucson", "AZ", Region::RockyMountains, 32.1161, -110.9411),
    ("FAT", "Fresno Yosemite International Airport", "Fresno", "CA", Region::RockyMountains, 36.7762, -119.7181),

    ("ORD", "O'Hare International Airport", "Chicago", "IL", Region::CentralPlains, 41.9786, -87.9048),
    ("OKC", "Will Rogers World Airport", "Oklahoma City", "OK", Region::CentralPlains, 35.3931, -97.6007),
    ("DFW", "Dallas/Fort Worth International Airport", "Dallas", "TX", Region::CentralPlains, 32.8968, -97.0380),
    ("IAH", "George Bush Intercontinental Airport", "Houston", "TX", Region::CentralPlains, 29.9844, -95.3414),
    ("MSP", "Minneapolis-Saint Paul International Airport", "Minneapolis", "MN", Region::CentralPlains, 44.8848, -93.2223),
    ("STL", "St. Louis Lambert International Airport", "St. Louis", "MO", Region::CentralPlains, 38.7487, -90.3708),
    ("MCI", "Kansas City International Airport", "Kansas City", "MO", Region::CentralPlains, 39.2976, -94.7139),
    ("ICT", "Wichita Dwight D. Eisenhower National Airport", "Wichita", "KS", Region::CentralPlains, 37.6499, -97.4331),
    ("AUS", "Austin-Bergstrom International Airport", "Austin", "TX", Region::CentralPlains, 30.1945, -97.6699),
    ("SAT", "San Antonio International Airport", "San Antonio", "TX", Region::CentralPlains, 29.5337, -98.4698),
    ("HOU", "William P. Hobby Airport", "Houston", "TX", Region::CentralPlains, 29.6454, -95.2789),
    ("DAL", "Dallas Love Field", "Dallas", "TX", Region::CentralPlains, 32.8471, -96.8518),
    ("LNK", "Lincoln Airport", "Lincoln", "NE", Region::CentralPlains, 40.8510, -96.7592),
    ("OMA", "Eppley Airfield", "Omaha", "NE", Region::CentralPlains, 41.3025, -95.8942),
    ("DSM", "Des Moines International Airport", "Des Moines", "IA", Region::CentralPlains, 41.5340, -93.6631),
    ("FAR", "Hector International Airport", "Fargo", "ND", Region::CentralPlains, 46.9207, -96.8158),

    ("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta", "GA", Region::Southeast, 33.6407, -84.4277),
    ("MIA", "Miami International Airport", "Miami", "FL", Region::Southeast, 25.7959, -80.2870),
    ("CLT", "Charlotte Douglas International Airport", "Charlotte", "NC", Region::Southeast, 35.2144, -80.9473),
    ("MCO", "Orlando International Airport", "Orlando", "FL", Region::Southeast, 28.4312, -81.3081),
    ("TPA", "Tampa International Airport", "Tampa", "FL", Region::Southeast, 27.9755, -82.5332),
    ("FLL", "Fort Lauderdale-Hollywood International Airport", "Fort Lauderdale", "FL", Region::Southeast, 26.0726, -80.1527),
    ("BNA", "Nashville International Airport", "Nashville", "TN", Region::Southeast, 36.1245, -86.6782),
    ("RDU", "Raleigh-Durham International Airport", "Raleigh", "NC", Region::Southeast, 35.8776, -78.7875),
    ("JAX", "Jacksonville International Airport", "Jacksonville", "FL", Region::Southeast, 30.4941, -81.6879),
    ("RSW", "Southwest Florida International Airport", "Fort Myers", "FL", Region::Southeast, 26.5362, -81.7552),
    ("MSY", "Louis Armstrong New Orleans International Airport", "New Orleans", "LA", Region::Southeast, 29.9934, -90.2581),
    ("SAV", "Savannah/Hilton Head International Airport", "Savannah", "GA", Region::Southeast, 32.1276, -81.2021),
    ("CHS", "Charleston International Airport", "Charleston", "SC", Region::Southeast, 32.8986, -80.0405),
    ("GSP", "Greenville-Spartanburg International Airport", "Greer", "SC", Region::Southeast, 34.8957, -82.2189),
    ("CHA", "Chattanooga Metropolitan Airport", "Chattanooga", "TN", Region::Southeast, 35.0353, -85.2038),
    ("TLH", "Tallahassee International Airport", "Tallahassee", "FL", Region::Southeast, 30.3965, -84.3503),
    ("GNV", "Gainesville Regional Airport", "Gainesville", "FL", Region::Southeast, 29.6901, -82.2718),
    ("MKY", "Marco Island Executive Airport", "Marco Island", "FL", Region::Southeast, 25.9954, -81.6726),
    ("PNS", "Pensacola International Airport", "Pensacola", "FL", Region::Southeast, 30.4734, -87.1866),
];
