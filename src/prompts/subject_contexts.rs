//! 科目知识库与科目查找
//!
//! 表的声明顺序就是匹配优先级。

use phf::phf_ordered_map;

pub static SUBJECT_CONTEXTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "polity" => r#"
INDIAN POLITY & GOVERNANCE (15-20% of UPSC Prelims, ~15-20 questions)

PRIMARY SOURCES (align questions with these):
- M. Laxmikanth's "Indian Polity" - THE standard reference
- NCERT Political Science (Class 11-12)
- Constitution of India (original text)
- Recent Supreme Court judgments

HIGH-WEIGHTAGE TOPICS:
1. Constitutional Framework: Preamble, Fundamental Rights (Art 12-35), DPSPs (Art 36-51), Fundamental Duties (Art 51A)
2. Union Executive: President (Art 52-62), Vice President, PM & Council of Ministers, Attorney General
3. Parliament: Lok Sabha, Rajya Sabha, Legislative procedures, Money Bill vs Finance Bill, Parliamentary privileges
4. Judiciary: Supreme Court (Art 124-147), High Courts, Judicial Review, PIL, Basic Structure Doctrine
5. State Government: Governor (Art 153-167), CM & State Council, State Legislature
6. Local Government: 73rd Amendment (Panchayats), 74th Amendment (Municipalities), PESA Act
7. Constitutional Bodies: Election Commission, CAG, UPSC, Finance Commission, NCSC/NCST
8. Emergency Provisions: National (Art 352), State (Art 356), Financial (Art 360)
9. Amendment Procedure: Art 368, types of amendments, ratification requirements
10. Recent Amendments: 101st (GST), 102nd (NCBC), 103rd (EWS quota), 104th (SC/ST reservation), 105th (OBC enumeration), 106th (Women's reservation)

COMMON UPSC TRAPS IN POLITY:
- Confusing similar articles (Art 14 vs 15 vs 16)
- President's discretionary vs constitutional powers
- Difference between Ordinance-making powers (Art 123 vs 213)
- Money Bill vs Financial Bill misconceptions
- Governor's discretionary powers misconceptions
- Difference between Constitutional and Statutory bodies"#,

    "history" => r#"
INDIAN HISTORY (10-18% of UPSC Prelims, ~10-18 questions)

PRIMARY SOURCES:
- NCERT History books (Class 6-12) - FOUNDATION
- Spectrum's "A Brief History of Modern India" - Modern History
- RS Sharma - Ancient India
- Satish Chandra - Medieval India
- Bipin Chandra - India's Struggle for Independence

ANCIENT HISTORY FOCUS AREAS:
1. Indus Valley Civilization: Sites, features, decline theories, script
2. Vedic Period: Rig Vedic vs Later Vedic, society, economy
3. Buddhism & Jainism: Teachings, councils, spread, decline
4. Mauryan Empire: Chandragupta, Ashoka, administration, Dhamma
5. Post-Mauryan: Kushanas, Satavahanas, Sangam literature
6. Gupta Period: Golden age, art, science, administration
7. Regional Kingdoms: Cholas, Pallavas, Chalukyas, Rashtrakutas

MEDIEVAL HISTORY FOCUS AREAS:
1. Delhi Sultanate: Dynasties, administration, architecture
2. Vijayanagara & Bahmani kingdoms
3. Mughal Empire: Administration, Mansabdari, art, religious policies
4. Bhakti & Sufi movements
5. Regional powers: Marathas, Sikhs, Rajputs

MODERN HISTORY (HIGHEST WEIGHTAGE):
1. British Expansion: Battles, policies, economic drain
2. Socio-Religious Reforms: Brahmo Samaj, Arya Samaj, others
3. 1857 Revolt: Causes, events, aftermath
4. Indian National Movement phases
5. Gandhi Era: Movements, strategies, timeline
6. Revolutionary Movement: HSRA, Anushilan, Ghadar
7. Constitutional Development: Acts of 1909, 1919, 1935
8. Independence & Partition

COMMON TRAPS:
- Confusing years of events (very specific dates asked)
- Mixing up reform movements and their founders
- Timeline errors in freedom movement
- Confusing British Acts and their provisions"#,

    "geography" => r#"
INDIAN & WORLD GEOGRAPHY (12-18% of UPSC Prelims, ~12-18 questions)

PRIMARY SOURCES:
- NCERT Geography (Class 6-12) - FOUNDATION
- G.C. Leong's "Certificate Physical and Human Geography"
- Oxford School Atlas
- Khullar's "India: A Comprehensive Geography"

PHYSICAL GEOGRAPHY:
1. Geomorphology: Landforms, plate tectonics, volcanism, earthquakes
2. Climatology: Atmospheric circulation, monsoons, climate types
3. Oceanography: Currents, tides, marine resources
4. Biogeography: Biomes, soils, vegetation types

INDIAN GEOGRAPHY (HIGH WEIGHTAGE):
1. Physical Features: Himalayas, Northern Plains, Peninsular Plateau, Coastal Plains, Islands
2. Drainage: River systems (Himalayan vs Peninsular), interlinking projects
3. Climate: Monsoon mechanism, seasons, rainfall distribution
4. Natural Vegetation: Forest types, biosphere reserves
5. Agriculture: Cropping patterns, irrigation, Green/White/Blue revolutions
6. Minerals & Energy: Distribution, reserves, policies
7. Industries: Location factors, industrial regions, policies
8. Transport: Roadways, railways, waterways, airways

WORLD GEOGRAPHY:
1. Continents and major features
2. Important straits, channels, passes
3. Climate regions and their characteristics
4. Major agricultural regions
5. Geopolitically significant locations

COMMON TRAPS:
- Confusing tributaries of rivers (left bank vs right bank)
- Mixing up national parks and their locations/species
- Wrong associations of crops with soil types
- Confusing similar-sounding geographical features"#,

    "economy" => r#"
INDIAN ECONOMY (10-15% of UPSC Prelims, ~10-15 questions)

PRIMARY SOURCES:
- NCERT Economics (Class 11-12)
- Ramesh Singh's "Indian Economy"
- Economic Survey (latest)
- Union Budget documents

MACROECONOMICS:
1. National Income: GDP, GNP, NDP, NNP concepts and calculation
2. Inflation: Types, measurement (CPI, WPI), causes, control
3. Monetary Policy: RBI tools (Repo, Reverse Repo, CRR, SLR, OMO)
4. Fiscal Policy: Budget components, deficits, FRBM Act
5. Balance of Payments: Current account, Capital account, forex reserves

BANKING & FINANCE:
1. Banking Structure: RBI, Commercial Banks, Payment Banks, SFBs
2. Financial Markets: Money market, capital market instruments
3. Financial Inclusion: Jan Dhan, MUDRA, Stand-Up India
4. Insurance & Pension: IRDAI, PFRDA, schemes

SECTORS:
1. Agriculture: MSP, procurement, subsidies, reforms
2. Industry: Make in India, PLI schemes, Industrial policies
3. Services: IT, telecom, tourism contributions

GOVERNMENT INITIATIVES:
1. Taxation: GST structure, Direct Tax Code
2. Social Sector: MGNREGA, PDS, food security
3. Infrastructure: Gati Shakti, Sagarmala, Bharatmala
4. Digital: UPI, ONDC, Digital India

INTERNATIONAL:
1. Trade: WTO, FTAs, trade balance
2. International Organizations: IMF, World Bank, ADB, NDB, AIIB
3. Global indices: HDI, GHI, Ease of Doing Business

COMMON TRAPS:
- Confusing monetary policy tools and their effects
- Mixing up different types of deficits
- Wrong associations of schemes with ministries
- Confusing similar-sounding financial instruments"#,

    "environment" => r#"
ENVIRONMENT & ECOLOGY (15-20% of UPSC Prelims, ~15-20 questions)

PRIMARY SOURCES:
- NCERT Biology (Ecology chapters)
- Shankar IAS Environment book
- ENVIS portals
- MoEFCC reports

ECOLOGY CONCEPTS:
1. Ecosystem: Structure, function, energy flow, nutrient cycling
2. Biodiversity: Levels, hotspots, threats, conservation
3. Ecological Succession: Primary, secondary, climax community
4. Biomes: Terrestrial and aquatic ecosystems
5. Food chains, food webs, ecological pyramids

BIODIVERSITY & CONSERVATION:
1. Protected Areas: Categories (National Parks, Sanctuaries, Biosphere Reserves, Tiger Reserves)
2. Conservation approaches: In-situ vs Ex-situ
3. IUCN Red List categories
4. Wildlife Protection Act 1972 (Schedules)
5. Biodiversity Act 2002
6. Important species: Endemic, endangered, flagship, keystone

ENVIRONMENTAL ISSUES:
1. Pollution: Air (sources, standards), Water, Soil, Noise
2. Climate Change: Greenhouse effect, global warming, impacts
3. Waste Management: Solid waste, e-waste, plastic waste rules
4. Desertification, land degradation

INTERNATIONAL CONVENTIONS:
1. UNFCCC: COPs, Paris Agreement, NDCs
2. CBD: Aichi targets, Kunming-Montreal framework
3. CITES: Appendices, wildlife trade
4. Ramsar: Wetlands, Indian sites
5. Montreal Protocol: Ozone, Kigali Amendment
6. Basel, Rotterdam, Stockholm: Hazardous substances

INDIAN INITIATIVES:
1. National Action Plan on Climate Change: 8 missions
2. CAMPA, Green India Mission
3. National Biodiversity Authority
4. Compensatory Afforestation

COMMON TRAPS:
- Confusing different protected area categories
- Mixing up international conventions and their focus
- Wrong locations of national parks/tiger reserves
- Confusing endemic species locations"#,

    "science" => r#"
SCIENCE & TECHNOLOGY (5-15% of UPSC Prelims, ~5-15 questions)

PRIMARY SOURCES:
- NCERT Science books (Class 6-10)
- NCERT Physics, Chemistry, Biology (Class 11-12 basics)
- Science Reporter magazine
- PIB releases on S&T

PHYSICS & SPACE:
1. Basic concepts: Motion, energy, waves, optics
2. Nuclear science: Fission, fusion, reactors
3. Space technology: ISRO missions, satellites, launch vehicles
4. Defense technology: Missiles, radar, indigenous development

CHEMISTRY:
1. Basic concepts: Atoms, molecules, reactions
2. Materials: Polymers, alloys, nanomaterials
3. Chemical industries: Fertilizers, petrochemicals

BIOLOGY & HEALTH:
1. Cell biology basics
2. Genetics: DNA, genes, genetic engineering, GMOs
3. Diseases: Communicable, non-communicable, epidemics
4. Biotechnology: Applications, ethics, regulations
5. Human body systems basics

CURRENT S&T DEVELOPMENTS:
1. AI & Machine Learning
2. Quantum computing
3. 5G/6G technology
4. Blockchain
5. Renewable energy tech
6. Space missions (global)
7. Medical breakthroughs

GOVERNMENT INITIATIVES:
1. ISRO programs: Chandrayaan, Gaganyaan, etc.
2. DRDO projects
3. DAE: Nuclear power program
4. DST: Various schemes
5. Make in India in defense

COMMON TRAPS:
- Confusing similar-sounding technologies
- Wrong agency associations (ISRO vs DRDO vs DAE)
- Outdated information on recent missions
- Mixing up satellite types and purposes"#,

    "current affairs" => r#"
CURRENT AFFAIRS (30-40% of UPSC Prelims directly/indirectly)

INTEGRATION APPROACH:
- Current affairs are NOT a separate subject
- UPSC tests static concepts THROUGH current events
- ~70% of current affairs questions need static knowledge to answer

KEY DOMAINS:
1. Government Schemes & Policies (link to Polity/Economy)
2. International Relations & Summits
3. Awards & Recognition (link to relevant fields)
4. Environmental developments (link to Environment)
5. Science & Technology breakthroughs
6. Economic data & reports
7. Constitutional & Legal developments

TIME FRAME:
- Focus on 18-24 months before exam
- Some questions test events from 2+ years ago
- Anniversary years (25th, 50th, 75th, 100th) are important

SOURCES TO ALIGN WITH:
- The Hindu / Indian Express editorials
- PIB (Press Information Bureau)
- Yojana & Kurukshetra magazines
- Economic Survey
- India Year Book

INTEGRATION EXAMPLES:
- G20 Summit → Link to economic organizations, India's foreign policy
- New environmental policy → Link to international conventions, constitutional provisions
- Supreme Court judgment → Link to relevant constitutional articles
- New government scheme → Link to ministry, budget allocation, related acts"#,

    "art and culture" => r#"
ART & CULTURE (5-10% of UPSC Prelims, ~5-10 questions)

PRIMARY SOURCES:
- NCERT Fine Arts book
- CCRT (Centre for Cultural Resources and Training) material
- Nitin Singhania's "Indian Art and Culture"

ARCHITECTURE:
1. Temple Architecture: Nagara, Dravida, Vesara styles
2. Cave Architecture: Ajanta, Ellora, Elephanta
3. Indo-Islamic: Sultanate and Mughal architecture
4. Colonial and Modern architecture
5. Buddhist Architecture: Stupas, Chaityas, Viharas

SCULPTURE & PAINTING:
1. Mauryan, Gupta, Medieval sculptures
2. Miniature paintings: Mughal, Rajasthani, Pahari schools
3. Folk paintings: Madhubani, Warli, Pattachitra, Kalamkari
4. Modern Indian art

PERFORMING ARTS:
1. Classical Dance: 8 forms recognized by Sangeet Natak Akademi
2. Folk Dances: State-wise
3. Classical Music: Hindustani vs Carnatic
4. Theatre: Traditional forms (Yakshagana, Kathakali, etc.)

LITERATURE:
1. Ancient: Vedic, Sanskrit literature
2. Medieval: Regional literature, Bhakti & Sufi poetry
3. Modern: Indian writers, literary awards

HERITAGE:
1. UNESCO World Heritage Sites in India
2. GI Tags
3. Intangible Cultural Heritage
4. Important monuments and their significance

COMMON TRAPS:
- Confusing similar dance forms
- Wrong state associations for folk arts
- Mixing up architectural styles
- Incorrect UNESCO site information"#,

};

/// 关键字别名：主表没有命中时按顺序再查一遍
const SUBJECT_ALIASES: &[(&[&str], &str)] = &[
    (&["polity", "constitution", "governance"], "polity"),
    (&["history", "freedom", "independence"], "history"),
    (&["geography", "geo"], "geography"),
    (&["economy", "economic", "finance"], "economy"),
    (&["environment", "ecology", "biodiversity"], "environment"),
    (&["science", "technology", "space"], "science"),
    (&["current", "affairs"], "current affairs"),
    (&["art", "culture", "heritage"], "art and culture"),
];

/// 查找科目对应的知识库
///
/// 不区分大小写的双向子串匹配：科目包含键，或键包含科目，第一个命中的生效。
/// 主表没有命中时再查关键字别名。都没有命中返回 `None`，提示词里不带知识库。
pub fn find_subject_context(subject: &str) -> Option<(&'static str, &'static str)> {
    let subject = subject.trim().to_lowercase();
    if subject.is_empty() {
        return None;
    }

    if let Some((key, context)) = SUBJECT_CONTEXTS
        .entries()
        .find(|(key, _)| subject.contains(**key) || key.contains(subject.as_str()))
    {
        return Some((*key, *context));
    }

    SUBJECT_ALIASES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| subject.contains(k)))
        .and_then(|(_, key)| SUBJECT_CONTEXTS.get_entry(*key))
        .map(|(key, context)| (*key, *context))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(subject: &str) -> Option<&'static str> {
        find_subject_context(subject).map(|(key, _)| key)
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        assert_eq!(key_of("Indian Polity"), Some("polity"));
        assert_eq!(key_of("MODERN HISTORY"), Some("history"));
        assert_eq!(key_of("Art and Culture"), Some("art and culture"));
    }

    #[test]
    fn test_key_containing_subject_matches() {
        // "econ" 是 "economy" 的子串
        assert_eq!(key_of("econ"), Some("economy"));
    }

    #[test]
    fn test_first_match_wins_in_table_order() {
        assert_eq!(key_of("polity and history"), Some("polity"));
    }

    #[test]
    fn test_alias_keywords() {
        assert_eq!(key_of("Constitution of India"), Some("polity"));
        assert_eq!(key_of("Freedom Struggle"), Some("history"));
        assert_eq!(key_of("Biodiversity"), Some("environment"));
        assert_eq!(key_of("Space Technology"), Some("science"));
    }

    #[test]
    fn test_unknown_or_blank_subject_has_no_context() {
        assert_eq!(key_of("Quantum Chromodynamics"), None);
        assert_eq!(key_of("   "), None);
    }

    #[test]
    fn test_table_order() {
        let keys: Vec<&str> = SUBJECT_CONTEXTS.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                "polity",
                "history",
                "geography",
                "economy",
                "environment",
                "science",
                "current affairs",
                "art and culture"
            ]
        );
    }
}
