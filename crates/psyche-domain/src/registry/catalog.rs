//! The fixed domain catalog (39 domains in 13 categories)

use crate::model::domain::{Category, DataPoint, Domain, VoiceIndicator};

const NEO_PI_R: &str = "Costa & McCrae (1992), NEO-PI-R";
const SD3: &str = "Jones & Paulhus (2014), Short Dark Triad (SD3)";
const MFQ: &str = "Graham, Haidt & Nosek (2009), Moral Foundations Questionnaire";
const PVQ: &str = "Schwartz (1992), Portrait Values Questionnaire";
const ECR_R: &str = "Fraley, Waller & Brennan (2000), ECR-R";
const SECS: &str = "Everett (2013), Social and Economic Conservatism Scale";

pub static CATALOG: [Domain; 39] = [
    // ---------------------------------------------------------------- Big Five
    Domain {
        id: "big_five_openness",
        category: Category::BigFive,
        name: "Openness to Experience",
        description: "Curiosity, imagination and appetite for novel ideas, art and experiences.",
        psychometric_source: NEO_PI_R,
        markers: &["curiosity", "imagination", "novelty", "aesthetics"],
        data_points: &[
            DataPoint::contrast(
                "Seeks out unfamiliar ideas and experiences",
                "Prefers the familiar and conventional",
            ),
            DataPoint::indicator("Uses abstract or metaphorical language"),
            DataPoint::indicator("Mentions art, music or philosophy unprompted"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "big_five_conscientiousness",
        category: Category::BigFive,
        name: "Conscientiousness",
        description: "Organization, dependability and goal-directed self-discipline.",
        psychometric_source: NEO_PI_R,
        markers: &["planning", "organization", "deadline", "responsibility"],
        data_points: &[
            DataPoint::contrast(
                "Plans ahead and follows through",
                "Acts spontaneously, leaves things unfinished",
            ),
            DataPoint::indicator("References schedules, lists or routines"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "big_five_extraversion",
        category: Category::BigFive,
        name: "Extraversion",
        description: "Sociability, assertiveness and the tendency to seek stimulation from others.",
        psychometric_source: NEO_PI_R,
        markers: &["party", "friends", "energized", "social"],
        data_points: &[
            DataPoint::contrast(
                "Draws energy from social situations",
                "Recharges alone, prefers small groups",
            ),
            DataPoint::indicator("Frequent first-person plural and social words"),
        ],
        voice_indicators: &[
            VoiceIndicator {
                feature: "speech_rate",
                high: "Fast, animated delivery",
                low: "Slow, measured delivery",
                weight: 0.3,
            },
            VoiceIndicator {
                feature: "pitch_variability",
                high: "Wide pitch range",
                low: "Flat intonation",
                weight: 0.2,
            },
        ],
    },
    Domain {
        id: "big_five_agreeableness",
        category: Category::BigFive,
        name: "Agreeableness",
        description: "Warmth, cooperation and concern for social harmony.",
        psychometric_source: NEO_PI_R,
        markers: &["kindness", "cooperation", "forgiveness", "trust"],
        data_points: &[
            DataPoint::contrast(
                "Accommodates others and avoids conflict",
                "Competitive, skeptical of others' motives",
            ),
            DataPoint::indicator("Expresses gratitude and appreciation"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "big_five_neuroticism",
        category: Category::BigFive,
        name: "Neuroticism",
        description: "Tendency to experience negative emotions such as anxiety, anger and sadness.",
        psychometric_source: NEO_PI_R,
        markers: &["worry", "stress", "anxious", "overwhelmed"],
        data_points: &[
            DataPoint::contrast(
                "Reacts strongly to setbacks, ruminates",
                "Emotionally even, recovers quickly",
            ),
            DataPoint::indicator("High rate of negative emotion words"),
        ],
        voice_indicators: &[VoiceIndicator {
            feature: "jitter",
            high: "Unsteady, tense voice",
            low: "Steady, relaxed voice",
            weight: 0.25,
        }],
    },
    // ---------------------------------------------------------------- Dark Triad
    Domain {
        id: "dark_triad_narcissism",
        category: Category::DarkTriad,
        name: "Narcissism",
        description: "Grandiosity, entitlement and need for admiration.",
        psychometric_source: SD3,
        markers: &["admiration", "superiority", "entitlement", "special"],
        data_points: &[
            DataPoint::contrast(
                "Centers conversations on own accomplishments",
                "Deflects praise, credits others",
            ),
            DataPoint::indicator("Heavy first-person singular with status words"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "dark_triad_machiavellianism",
        category: Category::DarkTriad,
        name: "Machiavellianism",
        description: "Strategic manipulation and a cynical view of human nature.",
        psychometric_source: SD3,
        markers: &["leverage", "manipulate", "strategy", "cynical"],
        data_points: &[
            DataPoint::contrast(
                "Treats relationships instrumentally",
                "Values candor over advantage",
            ),
            DataPoint::indicator("Describes others as means to an end"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "dark_triad_psychopathy",
        category: Category::DarkTriad,
        name: "Psychopathy",
        description: "Impulsivity, thrill seeking and low empathy or remorse.",
        psychometric_source: SD3,
        markers: &["thrill", "reckless", "remorseless", "impulsive"],
        data_points: &[
            DataPoint::contrast(
                "Dismisses consequences for others",
                "Expresses guilt and concern for harm",
            ),
            DataPoint::indicator("Low use of emotion and affiliation words"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Emotional Intelligence
    Domain {
        id: "emotional_intelligence_self_awareness",
        category: Category::EmotionalIntelligence,
        name: "Emotional Self-Awareness",
        description: "Ability to recognize and name one's own emotions as they occur.",
        psychometric_source: "Salovey & Mayer (1990); Goleman (1995)",
        markers: &["I feel", "I noticed", "reflect", "trigger"],
        data_points: &[
            DataPoint::indicator("Labels emotions with specific words"),
            DataPoint::contrast(
                "Connects feelings to their causes",
                "Describes events without emotional content",
            ),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "emotional_intelligence_empathy",
        category: Category::EmotionalIntelligence,
        name: "Empathy",
        description: "Sensitivity to and understanding of other people's emotional states.",
        psychometric_source: "Davis (1983), Interpersonal Reactivity Index",
        markers: &["understand", "perspective", "compassion", "listen"],
        data_points: &[
            DataPoint::indicator("Takes the perspective of others in stories"),
            DataPoint::contrast(
                "Validates other people's feelings",
                "Minimizes or ignores others' feelings",
            ),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "emotional_intelligence_regulation",
        category: Category::EmotionalIntelligence,
        name: "Emotion Regulation",
        description: "Capacity to manage and modulate emotional responses.",
        psychometric_source: "Gross & John (2003), Emotion Regulation Questionnaire",
        markers: &["calm down", "reframe", "breathe", "cope"],
        data_points: &[
            DataPoint::contrast(
                "Describes strategies for calming down",
                "Reports being swept away by emotions",
            ),
            DataPoint::indicator("Reappraises setbacks in a new light"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Cognitive Style
    Domain {
        id: "cognitive_need_for_cognition",
        category: Category::CognitiveStyle,
        name: "Need for Cognition",
        description: "Enjoyment of effortful thinking and complex problems.",
        psychometric_source: "Cacioppo & Petty (1982), Need for Cognition Scale",
        markers: &["puzzle", "think through", "analyze", "complex"],
        data_points: &[
            DataPoint::contrast(
                "Enjoys hard intellectual problems",
                "Prefers simple, ready-made answers",
            ),
            DataPoint::indicator("Long, multi-clause reasoning in messages"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "cognitive_analytical_thinking",
        category: Category::CognitiveStyle,
        name: "Analytical Thinking",
        description: "Preference for formal, logical and hierarchical reasoning.",
        psychometric_source: "Pennebaker et al. (2014), Categorical-Dynamic Index",
        markers: &["because", "therefore", "evidence", "logic"],
        data_points: &[
            DataPoint::indicator("High use of articles and prepositions"),
            DataPoint::contrast(
                "Builds arguments step by step",
                "Narrates in a personal, story-like way",
            ),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "cognitive_tolerance_for_ambiguity",
        category: Category::CognitiveStyle,
        name: "Tolerance for Ambiguity",
        description: "Comfort with uncertain, novel or contradictory situations.",
        psychometric_source: "Budner (1962), Intolerance of Ambiguity Scale",
        markers: &["uncertain", "it depends", "nuance", "grey area"],
        data_points: &[
            DataPoint::contrast(
                "Comfortable leaving questions open",
                "Seeks closure and definite answers",
            ),
            DataPoint::indicator("Uses hedges and tentative language"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Values
    Domain {
        id: "values_self_direction",
        category: Category::Values,
        name: "Self-Direction",
        description: "Independent thought and action, choosing one's own goals.",
        psychometric_source: PVQ,
        markers: &["freedom", "independence", "my own way", "autonomy"],
        data_points: &[
            DataPoint::indicator("Emphasizes choosing for oneself"),
            DataPoint::contrast("Resists imposed rules", "Defers to established guidance"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "values_achievement",
        category: Category::Values,
        name: "Achievement",
        description: "Personal success through demonstrating competence.",
        psychometric_source: PVQ,
        markers: &["success", "win", "ambition", "recognition"],
        data_points: &[
            DataPoint::indicator("Talks about goals, rankings and results"),
            DataPoint::contrast("Measures self by accomplishments", "Indifferent to status"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "values_benevolence",
        category: Category::Values,
        name: "Benevolence",
        description: "Preserving and enhancing the welfare of close others.",
        psychometric_source: PVQ,
        markers: &["help", "loyal", "care for", "family"],
        data_points: &[
            DataPoint::indicator("Describes going out of the way for friends"),
            DataPoint::contrast("Prioritizes close others' needs", "Prioritizes own needs"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "values_security",
        category: Category::Values,
        name: "Security",
        description: "Safety, harmony and stability of society, relationships and self.",
        psychometric_source: PVQ,
        markers: &["safe", "stable", "order", "protect"],
        data_points: &[
            DataPoint::indicator("Expresses concern about risk and stability"),
            DataPoint::contrast("Avoids risk", "Welcomes disruption"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Moral Foundations
    Domain {
        id: "moral_care",
        category: Category::MoralFoundations,
        name: "Care / Harm",
        description: "Moral concern for suffering and the protection of the vulnerable.",
        psychometric_source: MFQ,
        markers: &["suffering", "protect", "cruel", "compassion"],
        data_points: &[
            DataPoint::indicator("Judges actions by the harm they cause"),
            DataPoint::contrast("Moved by others' suffering", "Unmoved by appeals to harm"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "moral_fairness",
        category: Category::MoralFoundations,
        name: "Fairness / Cheating",
        description: "Moral concern for justice, rights and reciprocity.",
        psychometric_source: MFQ,
        markers: &["fair", "justice", "equal", "cheat"],
        data_points: &[
            DataPoint::indicator("Frames issues as questions of fairness"),
            DataPoint::contrast("Outraged by cheating", "Pragmatic about rule-bending"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "moral_loyalty",
        category: Category::MoralFoundations,
        name: "Loyalty / Betrayal",
        description: "Moral concern for group allegiance and solidarity.",
        psychometric_source: MFQ,
        markers: &["loyal", "betray", "team", "our people"],
        data_points: &[
            DataPoint::indicator("Praises standing by one's group"),
            DataPoint::orientation(
                "Group loyalty is a core virtue",
                "Loyalty must yield to universal principles",
            ),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "moral_authority",
        category: Category::MoralFoundations,
        name: "Authority / Subversion",
        description: "Moral concern for tradition, hierarchy and legitimate authority.",
        psychometric_source: MFQ,
        markers: &["respect", "tradition", "duty", "obey"],
        data_points: &[
            DataPoint::indicator("Appeals to tradition or rank"),
            DataPoint::orientation(
                "Respect for authority keeps order",
                "Authority should be questioned",
            ),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Attachment
    Domain {
        id: "attachment_anxiety",
        category: Category::Attachment,
        name: "Attachment Anxiety",
        description: "Fear of rejection and abandonment in close relationships.",
        psychometric_source: ECR_R,
        markers: &["abandoned", "reassurance", "clingy", "rejected"],
        data_points: &[
            DataPoint::contrast(
                "Worries partners will leave",
                "Feels secure in relationships",
            ),
            DataPoint::indicator("Seeks reassurance repeatedly"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "attachment_avoidance",
        category: Category::Attachment,
        name: "Attachment Avoidance",
        description: "Discomfort with closeness and dependence on others.",
        psychometric_source: ECR_R,
        markers: &["space", "independent", "distance", "smothered"],
        data_points: &[
            DataPoint::contrast(
                "Keeps partners at arm's length",
                "Comfortable depending on others",
            ),
            DataPoint::indicator("Avoids discussing feelings about relationships"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Motivation
    Domain {
        id: "motivation_intrinsic",
        category: Category::Motivation,
        name: "Intrinsic Motivation",
        description: "Engaging in activities for their inherent satisfaction.",
        psychometric_source: "Deci & Ryan (1985), Self-Determination Theory",
        markers: &["enjoy", "passion", "for its own sake", "flow"],
        data_points: &[
            DataPoint::contrast(
                "Does things because they are interesting",
                "Does things for rewards or approval",
            ),
            DataPoint::indicator("Describes losing track of time in an activity"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "motivation_achievement_need",
        category: Category::Motivation,
        name: "Need for Achievement",
        description: "Drive to excel and meet standards of excellence.",
        psychometric_source: "McClelland (1961), The Achieving Society",
        markers: &["excel", "goal", "challenge", "improve"],
        data_points: &[
            DataPoint::indicator("Sets measurable targets"),
            DataPoint::contrast(
                "Chooses moderately hard challenges",
                "Avoids evaluation and competition",
            ),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Mindset
    Domain {
        id: "mindset_growth",
        category: Category::Mindset,
        name: "Growth Mindset",
        description: "Belief that abilities can be developed through effort and learning.",
        psychometric_source: "Dweck (2006), Implicit Theories of Intelligence Scale",
        markers: &["learn", "practice", "yet", "effort"],
        data_points: &[
            DataPoint::mindset(
                "Treats failure as information",
                "Treats failure as proof of limits",
            ),
            DataPoint::mindset(
                "Talent is a starting point",
                "You either have it or you don't",
            ),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "mindset_grit",
        category: Category::Mindset,
        name: "Grit",
        description: "Perseverance and passion for long-term goals.",
        psychometric_source: "Duckworth et al. (2007), Grit Scale",
        markers: &["persevere", "keep going", "years", "never give up"],
        data_points: &[
            DataPoint::contrast(
                "Sticks with projects for years",
                "Switches interests frequently",
            ),
            DataPoint::mindset(
                "Setbacks are part of the path",
                "Setbacks mean it is time to quit",
            ),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Political Orientation
    Domain {
        id: "political_economic",
        category: Category::PoliticalOrientation,
        name: "Economic Orientation",
        description: "Position on markets, taxation and the role of government in the economy.",
        psychometric_source: SECS,
        markers: &["taxes", "free market", "welfare", "regulation"],
        data_points: &[
            DataPoint::orientation(
                "Lower taxes and lighter regulation",
                "Stronger safety net and redistribution",
            ),
            DataPoint::orientation(
                "Markets allocate best",
                "Markets need active correction",
            ),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "political_social",
        category: Category::PoliticalOrientation,
        name: "Social Orientation",
        description: "Position on tradition, social change and personal liberties.",
        psychometric_source: SECS,
        markers: &["tradition", "family values", "progress", "rights"],
        data_points: &[
            DataPoint::orientation(
                "Preserve established customs",
                "Embrace social change",
            ),
            DataPoint::indicator("Frames issues in terms of heritage or progress"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Wellbeing
    Domain {
        id: "wellbeing_life_satisfaction",
        category: Category::Wellbeing,
        name: "Life Satisfaction",
        description: "Global cognitive judgment of one's life as a whole.",
        psychometric_source: "Diener et al. (1985), Satisfaction With Life Scale",
        markers: &["grateful", "content", "fulfilled", "happy with"],
        data_points: &[
            DataPoint::contrast(
                "Describes life as close to ideal",
                "Wishes for a different life",
            ),
            DataPoint::indicator("Positive evaluation of life circumstances"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "wellbeing_optimism",
        category: Category::Wellbeing,
        name: "Optimism",
        description: "Generalized expectation that good things will happen.",
        psychometric_source: "Scheier, Carver & Bridges (1994), LOT-R",
        markers: &["hopeful", "looking forward", "will work out", "bright side"],
        data_points: &[
            DataPoint::contrast("Expects good outcomes", "Expects things to go wrong"),
            DataPoint::indicator("Future-tense positive statements"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "wellbeing_resilience",
        category: Category::Wellbeing,
        name: "Resilience",
        description: "Ability to bounce back from stress and adversity.",
        psychometric_source: "Smith et al. (2008), Brief Resilience Scale",
        markers: &["bounce back", "recover", "get through", "adapt"],
        data_points: &[
            DataPoint::contrast(
                "Recovers quickly after hard times",
                "Struggles long after setbacks",
            ),
            DataPoint::indicator("Narrates adversity followed by recovery"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Social Cognition
    Domain {
        id: "social_locus_of_control",
        category: Category::SocialCognition,
        name: "Internal Locus of Control",
        description: "Belief that outcomes depend on one's own actions rather than external forces.",
        psychometric_source: "Rotter (1966), Internal-External Locus of Control Scale",
        markers: &["my choice", "up to me", "luck", "fate"],
        data_points: &[
            DataPoint::contrast(
                "Attributes outcomes to own effort",
                "Attributes outcomes to luck or others",
            ),
            DataPoint::indicator("Agentive first-person verbs"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "social_self_monitoring",
        category: Category::SocialCognition,
        name: "Self-Monitoring",
        description: "Tendency to adjust self-presentation to fit social situations.",
        psychometric_source: "Snyder (1974), Self-Monitoring Scale",
        markers: &["fit in", "impression", "audience", "adapt"],
        data_points: &[
            DataPoint::contrast(
                "Tailors behavior to the audience",
                "Acts the same regardless of context",
            ),
            DataPoint::indicator("Describes managing how others see them"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "social_trust",
        category: Category::SocialCognition,
        name: "Generalized Trust",
        description: "Default belief in the benevolence and honesty of other people.",
        psychometric_source: "Yamagishi (1986), General Trust Scale",
        markers: &["trust", "honest", "suspicious", "good intentions"],
        data_points: &[
            DataPoint::contrast(
                "Assumes good intentions from strangers",
                "Expects to be taken advantage of",
            ),
            DataPoint::indicator("Reports relying on others' word"),
        ],
        voice_indicators: &[],
    },
    // ---------------------------------------------------------------- Interpersonal
    Domain {
        id: "interpersonal_assertiveness",
        category: Category::Interpersonal,
        name: "Assertiveness",
        description: "Expressing needs, opinions and boundaries directly.",
        psychometric_source: "Rathus (1973), Rathus Assertiveness Schedule",
        markers: &["I need", "boundary", "speak up", "no"],
        data_points: &[
            DataPoint::contrast(
                "States needs plainly",
                "Goes along to avoid friction",
            ),
            DataPoint::indicator("Direct requests and imperatives"),
        ],
        voice_indicators: &[VoiceIndicator {
            feature: "loudness",
            high: "Projects voice clearly",
            low: "Speaks softly, trails off",
            weight: 0.2,
        }],
    },
    Domain {
        id: "interpersonal_conflict_style",
        category: Category::Interpersonal,
        name: "Collaborative Conflict Style",
        description: "Handling disagreement by seeking solutions that satisfy both sides.",
        psychometric_source: "Thomas & Kilmann (1974), Thomas-Kilmann Conflict Mode Instrument",
        markers: &["compromise", "both sides", "work it out", "middle ground"],
        data_points: &[
            DataPoint::contrast(
                "Looks for win-win resolutions",
                "Competes or withdraws in disagreements",
            ),
            DataPoint::indicator("Describes negotiating shared outcomes"),
        ],
        voice_indicators: &[],
    },
    Domain {
        id: "interpersonal_humor",
        category: Category::Interpersonal,
        name: "Affiliative Humor",
        description: "Using humor to amuse others and ease social interaction.",
        psychometric_source: "Martin et al. (2003), Humor Styles Questionnaire",
        markers: &["joke", "laugh", "funny", "banter"],
        data_points: &[
            DataPoint::contrast(
                "Jokes to put others at ease",
                "Rarely uses humor",
            ),
            DataPoint::indicator("Playful wordplay and laughter tokens"),
        ],
        voice_indicators: &[],
    },
];
