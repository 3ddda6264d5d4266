//! The S-57 object class catalog (object label code -> acronym/name).

/// A single entry in the object class catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectClass {
    /// The numeric object label code (`OBJL`).
    pub code: u16,
    /// The six-character acronym, e.g. `"DEPARE"`.
    pub acronym: &'static str,
    /// The human-readable name, e.g. `"Depth area"`.
    pub name: &'static str,
}

/// The full S-57 object class table, object label codes 1-170 and
/// 300-304 (the cartographic "$"-prefixed classes).
///
/// Acronyms and names come directly from the IHO S-57 object catalogue.
pub static OBJECT_CLASSES: &[ObjectClass] = &[
    oc(1, "ADMARE", "Administration area"),
    oc(2, "AIRARE", "Airport/airfield"),
    oc(3, "ACHBRT", "Anchor berth"),
    oc(4, "ACHARE", "Anchorage area"),
    oc(5, "BCNCAR", "Beacon, cardinal"),
    oc(6, "BCNISD", "Beacon, isolated danger"),
    oc(7, "BCNLAT", "Beacon, lateral"),
    oc(8, "BCNSAW", "Beacon, safe water"),
    oc(9, "BCNSPP", "Beacon, special purpose/general"),
    oc(10, "BERTHS", "Berth"),
    oc(11, "BRIDGE", "Bridge"),
    oc(12, "BUISGL", "Building, single"),
    oc(13, "BUAARE", "Built-up area"),
    oc(14, "BOYCAR", "Buoy, cardinal"),
    oc(15, "BOYINB", "Buoy, installation"),
    oc(16, "BOYISD", "Buoy, isolated danger"),
    oc(17, "BOYLAT", "Buoy, lateral"),
    oc(18, "BOYSAW", "Buoy, safe water"),
    oc(19, "BOYSPP", "Buoy, special purpose/general"),
    oc(20, "CBLARE", "Cable area"),
    oc(21, "CBLOHD", "Cable, overhead"),
    oc(22, "CBLSUB", "Cable, submarine"),
    oc(23, "CANALS", "Canal"),
    oc(24, "CTSARE", "Cargo transhipment area"),
    oc(25, "CAUSWY", "Causeway"),
    oc(26, "CTNARE", "Caution area"),
    oc(27, "CHKPNT", "Checkpoint"),
    oc(28, "CGUSTA", "Coastguard station"),
    oc(29, "COALNE", "Coastline"),
    oc(30, "CONZNE", "Contiguous zone"),
    oc(31, "COSARE", "Continental shelf area"),
    oc(32, "CTRPNT", "Control point"),
    oc(33, "CONVYR", "Conveyor"),
    oc(34, "CRANES", "Crane"),
    oc(35, "CURENT", "Current - non-gravitational"),
    oc(36, "CUSZNE", "Custom zone"),
    oc(37, "DAMCON", "Dam"),
    oc(38, "DAYMAR", "Daymark"),
    oc(39, "DWRTCL", "Deep water route centerline"),
    oc(40, "DWRTPT", "Deep water route part"),
    oc(41, "DEPCNT", "Depth contour"),
    oc(42, "DEPARE", "Depth area"),
    oc(43, "DISMAR", "Distance mark"),
    oc(44, "DOCARE", "Dock area"),
    oc(45, "DRGARE", "Dredged area"),
    oc(46, "DRYDOC", "Dry dock"),
    oc(47, "DMPGRD", "Dumping ground"),
    oc(48, "DWKARE", "Deep water route"),
    oc(49, "CKYARD", "Checkpoint, yard"),
    oc(50, "EDFWTR", "Eddy/foul water"),
    oc(51, "EXEZNE", "Exclusive Economic Zone"),
    oc(52, "FAIRWY", "Fairway"),
    oc(53, "FNCLNE", "Fence/wall"),
    oc(54, "FERYRT", "Ferry route"),
    oc(55, "FSHZNE", "Fishery zone"),
    oc(56, "FSHFAC", "Fishing facility"),
    oc(57, "FSHGRD", "Fishing ground"),
    oc(58, "FLODOC", "Floating dock"),
    oc(59, "FOGSIG", "Fog signal"),
    oc(60, "FORSTC", "Fortified structure"),
    oc(61, "FRPARE", "Free port area"),
    oc(62, "GATCON", "Gate"),
    oc(63, "GRIDRN", "Gridiron"),
    oc(64, "HRBARE", "Harbour area"),
    oc(65, "HRBFAC", "Harbour facility"),
    oc(66, "HULKES", "Hulk"),
    oc(67, "ICEARE", "Ice area"),
    oc(68, "ICNARE", "Incineration area"),
    oc(69, "ISTZNE", "Inshore traffic zone"),
    oc(70, "LAKARE", "Lake"),
    oc(71, "LNDARE", "Land area"),
    oc(72, "LNDELV", "Land elevation"),
    oc(73, "LNDRGN", "Land region"),
    oc(74, "LNDMRK", "Landmark"),
    oc(75, "LIGHTS", "Light"),
    oc(76, "LITFLT", "Light float"),
    oc(77, "LITVES", "Light vessel"),
    oc(78, "LOCMAG", "Local magnetic anomaly"),
    oc(79, "LOKBSN", "Lock basin"),
    oc(80, "LOGPON", "Log pond"),
    oc(81, "MAGVAR", "Magnetic variation"),
    oc(82, "MARCUL", "Marine farm/culture"),
    oc(83, "MIPARE", "Military practice area"),
    oc(84, "MORFAC", "Mooring/warping facility"),
    oc(85, "NAVLNE", "Navigation line"),
    oc(86, "OBSTRN", "Obstruction"),
    oc(87, "OFSPLF", "Offshore platform"),
    oc(88, "OSPARE", "Offshore production area"),
    oc(89, "OILBAR", "Oil barrier"),
    oc(90, "PILPNT", "Pile"),
    oc(91, "PILBOP", "Pilot boarding place"),
    oc(92, "PIPARE", "Pipeline area"),
    oc(93, "PIPOHD", "Pipeline, overhead"),
    oc(94, "PIPSOL", "Pipeline, submarine/on land"),
    oc(95, "PONTON", "Pontoon"),
    oc(96, "PRCARE", "Precautionary area"),
    oc(97, "PRDARE", "Production/storage area"),
    oc(98, "PYLONS", "Pylon/bridge support"),
    oc(99, "RADLNE", "Radar line"),
    oc(100, "RADRNG", "Radar range"),
    oc(101, "RADRFL", "Radar reflector"),
    oc(102, "RADSTA", "Radio station"),
    oc(103, "RTPBCN", "Radar transponder beacon"),
    oc(104, "RCTLPT", "Recommended track"),
    oc(105, "RECTRC", "Recommended traffic lane"),
    oc(106, "REFDMP", "Refuse dump"),
    oc(107, "RSCSTA", "Rescue station"),
    oc(108, "RESARE", "Restricted area"),
    oc(109, "RETRFL", "Retro-reflector"),
    oc(110, "RIVERS", "River"),
    oc(111, "ROADWY", "Road"),
    oc(112, "RUNWAY", "Runway"),
    oc(113, "SNDWAV", "Sand waves"),
    oc(114, "SEAARE", "Sea area/named water area"),
    oc(115, "SPLARE", "Sea-plane landing area"),
    oc(116, "SBDARE", "Seabed area"),
    oc(117, "SLCONS", "Shoreline construction"),
    oc(118, "SISTAT", "Signal station, traffic"),
    oc(119, "SISTAW", "Signal station, warning"),
    oc(120, "SILTNK", "Silo/tank"),
    oc(121, "SLOTOP", "Slope topline"),
    oc(122, "SLOGRD", "Sloping ground"),
    oc(123, "SMCFAC", "Small craft facility"),
    oc(124, "SOUNDG", "Sounding"),
    oc(125, "SPRING", "Spring"),
    oc(126, "STSLNE", "Straight territorial sea baseline"),
    oc(127, "SUBTLN", "Submarine transit lane"),
    oc(128, "SWPARE", "Swept area"),
    oc(129, "TESARE", "Territorial sea area"),
    oc(130, "TS_PRH", "Tidal stream - harmonic prediction"),
    oc(131, "TS_PNH", "Tidal stream - non-harmonic prediction"),
    oc(132, "TS_PAD", "Tidal stream panel data"),
    oc(133, "TS_TIS", "Tidal stream - time series"),
    oc(134, "T_HMON", "Tide - harmonic prediction"),
    oc(135, "T_NHMN", "Tide - non-harmonic prediction"),
    oc(136, "T_TIMS", "Tide - time series"),
    oc(137, "TIDEWY", "Tideway"),
    oc(138, "TOPMAR", "Topmark"),
    oc(139, "TSELNE", "Traffic separation line"),
    oc(140, "TSSBND", "Traffic separation scheme boundary"),
    oc(141, "TSSCRS", "Traffic separation scheme crossing"),
    oc(142, "TSSLPT", "Traffic separation scheme lane part"),
    oc(143, "TSSRON", "Traffic separation scheme roundabout"),
    oc(144, "TSEZNE", "Traffic separation zone"),
    oc(145, "TUNNEL", "Tunnel"),
    oc(146, "TWRTPT", "Two-way route part"),
    oc(147, "UWTROC", "Underwater rock/awash rock"),
    oc(148, "UNSARE", "Unsurveyed area"),
    oc(149, "VEGATN", "Vegetation"),
    oc(150, "WATTUR", "Water turbulence"),
    oc(151, "WATFAL", "Waterfall"),
    oc(152, "WEDKLP", "Weed/kelp"),
    oc(153, "WRECKS", "Wreck"),
    oc(154, "TS_FEB", "Tidal stream - flood/ebb"),
    oc(155, "M_ACCY", "Accuracy of data"),
    oc(156, "M_CSCL", "Compilation scale of data"),
    oc(157, "M_COVR", "Coverage"),
    oc(158, "M_HDAT", "Horizontal datum of data"),
    oc(159, "M_HOPA", "Horizontal datum shift parameters"),
    oc(160, "M_NPUB", "Nautical publication information"),
    oc(161, "M_NSYS", "Navigational system of marks"),
    oc(162, "M_PROD", "Production information"),
    oc(163, "M_QUAL", "Quality of data"),
    oc(164, "M_SDAT", "Sounding datum"),
    oc(165, "M_SREL", "Survey reliability"),
    oc(166, "M_UNIT", "Units of measurement of data"),
    oc(167, "M_VDAT", "Vertical datum of data"),
    oc(168, "C_AGGR", "Aggregation"),
    oc(169, "C_ASSO", "Association"),
    oc(170, "C_STAC", "Stacked on/stacked under"),
    oc(300, "$AREAS", "Cartographic area"),
    oc(301, "$LINES", "Cartographic line"),
    oc(302, "$CSYMB", "Cartographic symbol"),
    oc(303, "$COMPS", "Compass"),
    oc(304, "$TEXTS", "Text"),
];

const fn oc(code: u16, acronym: &'static str, name: &'static str) -> ObjectClass {
    ObjectClass { code, acronym, name }
}

/// Looks up an object class by its numeric code.
pub fn by_code(code: u16) -> Option<ObjectClass> {
    OBJECT_CLASSES.iter().copied().find(|class| class.code == code)
}

/// Looks up an object class by its acronym, case-insensitively.
pub fn by_acronym(acronym: &str) -> Option<ObjectClass> {
    OBJECT_CLASSES
        .iter()
        .copied()
        .find(|class| class.acronym.eq_ignore_ascii_case(acronym))
}

/// Required attribute acronyms for object classes where an absent or
/// null-valued attribute should raise a `MISSING_REQUIRED_ATTR` warning.
/// Not exhaustive of the full S-57 attribute catalogue, only the subset
/// this decoder is conservatively strict about.
pub fn required_attributes(object_acronym: &str) -> &'static [&'static str] {
    match object_acronym {
        "DEPARE" => &["DRVAL1"],
        "SOUNDG" => &["VALSOU"],
        "BOYLAT" | "BOYISD" | "BOYSPP" | "BOYCAR" | "BOYSAW" | "BOYINB" => &["CATBOY"],
        "LIGHTS" => &["COLOUR"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_code_finds_known_entries() {
        let depare = by_code(42).unwrap();
        assert_eq!(depare.acronym, "DEPARE");
        let soundg = by_code(124).unwrap();
        assert_eq!(soundg.name, "Sounding");
    }

    #[test]
    fn by_acronym_is_case_insensitive() {
        assert_eq!(by_acronym("lights").unwrap().code, 75);
    }

    #[test]
    fn unknown_code_returns_none() {
        assert!(by_code(9999).is_none());
    }

    #[test]
    fn required_attributes_for_depare() {
        assert_eq!(required_attributes("DEPARE"), &["DRVAL1"]);
        assert!(required_attributes("BUISGL").is_empty());
    }
}
