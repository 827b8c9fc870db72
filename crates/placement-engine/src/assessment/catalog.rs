use super::domain::{AssessmentItem, Difficulty, ItemId, Skill};

fn item(
    id: &str,
    difficulty: Difficulty,
    skill: Skill,
    text: &str,
    options: [&str; 4],
    correct_option_index: usize,
) -> AssessmentItem {
    AssessmentItem {
        id: ItemId::new(id),
        text: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_option_index,
        difficulty,
        skill,
    }
}

pub(crate) fn standard_items() -> Vec<AssessmentItem> {
    use Difficulty::*;
    use Skill::*;

    vec![
        // A1
        item("a1-01", A1, Grammar, "She ___ a teacher.", ["is", "are", "am", "be"], 0),
        item(
            "a1-02",
            A1,
            Vocabulary,
            "Which word is a colour?",
            ["table", "green", "run", "happy"],
            1,
        ),
        item("a1-03", A1, Grammar, "I ___ from Spain.", ["is", "are", "am", "be"], 2),
        item(
            "a1-04",
            A1,
            Vocabulary,
            "What do you say when you meet someone in the morning?",
            ["Good night", "Goodbye", "Good morning", "See you"],
            2,
        ),
        item(
            "a1-05",
            A1,
            Reading,
            "'Tom has two sisters and one brother.' How many siblings does Tom have?",
            ["one", "two", "three", "four"],
            2,
        ),
        item(
            "a1-06",
            A1,
            Usage,
            "___ is your name?",
            ["What", "Who", "Where", "When"],
            0,
        ),
        // A2
        item(
            "a2-01",
            A2,
            Grammar,
            "Yesterday we ___ to the cinema.",
            ["go", "went", "gone", "going"],
            1,
        ),
        item(
            "a2-02",
            A2,
            Grammar,
            "This book is ___ than that one.",
            [
                "interesting",
                "more interesting",
                "most interesting",
                "interestinger",
            ],
            1,
        ),
        item(
            "a2-03",
            A2,
            Vocabulary,
            "Choose the opposite of 'cheap'.",
            ["expensive", "small", "quick", "easy"],
            0,
        ),
        item(
            "a2-04",
            A2,
            Usage,
            "There isn't ___ milk left in the fridge.",
            ["some", "many", "any", "a"],
            2,
        ),
        item(
            "a2-05",
            A2,
            Reading,
            "'The museum opens at 9 and closes at 5, except on Mondays.' When can you NOT visit?",
            [
                "Tuesday morning",
                "Monday afternoon",
                "Friday at 10",
                "Sunday at 4",
            ],
            1,
        ),
        item(
            "a2-06",
            A2,
            Grammar,
            "I have lived here ___ 2015.",
            ["for", "since", "during", "from"],
            1,
        ),
        // B1
        item(
            "b1-01",
            B1,
            Grammar,
            "If it rains tomorrow, we ___ at home.",
            ["stay", "will stay", "would stay", "stayed"],
            1,
        ),
        item(
            "b1-02",
            B1,
            Grammar,
            "She asked me where I ___.",
            ["live", "lived", "am living", "will live"],
            1,
        ),
        item(
            "b1-03",
            B1,
            Vocabulary,
            "He finally ___ smoking last year.",
            ["gave up", "gave in", "gave out", "gave off"],
            0,
        ),
        item(
            "b1-04",
            B1,
            Usage,
            "I'm not used to ___ up so early.",
            ["get", "getting", "got", "be getting"],
            1,
        ),
        item(
            "b1-05",
            B1,
            Reading,
            "'Despite the heavy traffic, Maria arrived on time.' What do we learn?",
            [
                "Maria was late",
                "The traffic was light",
                "Maria was punctual although the traffic was bad",
                "Maria did not travel",
            ],
            2,
        ),
        item(
            "b1-06",
            B1,
            Grammar,
            "The letter ___ by the manager yesterday.",
            ["signed", "was signed", "has signed", "is signing"],
            1,
        ),
        // B2
        item(
            "b2-01",
            B2,
            Grammar,
            "By the time we arrived, the film ___.",
            [
                "already started",
                "has already started",
                "had already started",
                "was already starting",
            ],
            2,
        ),
        item(
            "b2-02",
            B2,
            Grammar,
            "I wish I ___ more time to travel.",
            ["have", "had", "will have", "would had"],
            1,
        ),
        item(
            "b2-03",
            B2,
            Vocabulary,
            "The company decided to ___ the launch until spring.",
            ["put off", "put up", "put on", "put across"],
            0,
        ),
        item(
            "b2-04",
            B2,
            Usage,
            "Hardly ___ the room when the phone rang.",
            ["I had entered", "had I entered", "I entered", "did I entered"],
            1,
        ),
        item(
            "b2-05",
            B2,
            Reading,
            "'The proposal, while ambitious, lacks a realistic budget.' The writer thinks the proposal is...",
            [
                "fully convincing",
                "financially unrealistic",
                "too modest",
                "already approved",
            ],
            1,
        ),
        item(
            "b2-06",
            B2,
            Vocabulary,
            "Her explanation was so ___ that everyone understood immediately.",
            ["lucid", "opaque", "tedious", "vague"],
            0,
        ),
        // C1
        item(
            "c1-01",
            C1,
            Grammar,
            "Not only ___ late, but he also forgot the documents.",
            ["he arrived", "did he arrive", "he did arrive", "arrived he"],
            1,
        ),
        item(
            "c1-02",
            C1,
            Vocabulary,
            "The minister's speech was deliberately ___, leaving room for several interpretations.",
            ["ambiguous", "explicit", "concise", "candid"],
            0,
        ),
        item(
            "c1-03",
            C1,
            Grammar,
            "Had I known about the delay, I ___ a later train.",
            [
                "would take",
                "would have taken",
                "had taken",
                "will have taken",
            ],
            1,
        ),
        item(
            "c1-04",
            C1,
            Usage,
            "The results were ___ with the team's earlier predictions.",
            ["consistent", "constant", "considerate", "consequent"],
            0,
        ),
        item(
            "c1-05",
            C1,
            Reading,
            "'The reforms were less a break with tradition than a continuation of it.' The reforms mostly...",
            [
                "rejected tradition",
                "extended existing practice",
                "were never implemented",
                "caused a crisis",
            ],
            1,
        ),
        item(
            "c1-06",
            C1,
            Vocabulary,
            "To ___ a problem is to make it worse.",
            ["exacerbate", "alleviate", "mitigate", "resolve"],
            0,
        ),
        // C2
        item(
            "c2-01",
            C2,
            Vocabulary,
            "His ___ remarks offended nearly everyone at the dinner.",
            ["tactless", "tactful", "taciturn", "tactile"],
            0,
        ),
        item(
            "c2-02",
            C2,
            Grammar,
            "Little ___ that the decision would cost her the election.",
            [
                "she realised",
                "did she realise",
                "she did realise",
                "realised she",
            ],
            1,
        ),
        item(
            "c2-03",
            C2,
            Usage,
            "The report glosses ___ the most serious failings.",
            ["over", "out", "through", "off"],
            0,
        ),
        item(
            "c2-04",
            C2,
            Vocabulary,
            "A ___ account is brief but covers everything essential.",
            ["succinct", "verbose", "perfunctory", "rambling"],
            0,
        ),
        item(
            "c2-05",
            C2,
            Reading,
            "'Her praise was so fulsome that it bordered on the insincere.' The praise was...",
            ["restrained", "excessive", "sincere and modest", "absent"],
            1,
        ),
        item(
            "c2-06",
            C2,
            Grammar,
            "It is essential that every applicant ___ the form in person.",
            ["submits", "submit", "submitted", "will submit"],
            1,
        ),
    ]
}
