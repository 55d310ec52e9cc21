//! Shipped sample content: physics chapter 8, "Force and Laws of Motion"
//!
//! Used by the demo binaries and as a realistic fixture in tests.

use crate::core::types::{ChapterId, PackId};

use super::catalog::{
    ActivityItem, ActivityKind, Catalog, Chapter, LearningPack, Question, SectionStatus, Subsection,
};
use super::curiosity::{
    CuriosityCategory, CuriosityItem, CuriosityKind, CuriosityLibrary, NewsArticle, Topic,
};

/// Chapter id of the sample chapter
pub fn chapter_id() -> ChapterId {
    ChapterId::new("ch8")
}

/// Full sample catalog: one physics chapter with its learning pack
pub fn catalog() -> Catalog {
    Catalog {
        chapters: vec![Chapter {
            id: chapter_id(),
            subject: "physics".to_string(),
            title: "Chapter 8: Force and Laws of Motion".to_string(),
            learning_pack: Some(learning_pack()),
            subsections: subsections(),
        }],
    }
}

fn learning_pack() -> LearningPack {
    LearningPack {
        pack_id: PackId::new("force-basics-pack"),
        pack_title: "Understanding Force".to_string(),
        items: vec![
            ActivityItem {
                id: "watch-force".to_string(),
                title: "What is Force?".to_string(),
                description: "Learn how every push or pull causes motion or changes shape."
                    .to_string(),
                duration_label: "2 min".to_string(),
                xp_reward: 10,
                kind: ActivityKind::Watch {
                    duration_seconds: 12,
                },
            },
            ActivityItem {
                id: "explore-force".to_string(),
                title: "Push, Pull & Hit Simulation".to_string(),
                description:
                    "Try interacting with virtual objects to see how force makes them move or stop."
                        .to_string(),
                duration_label: "3 min".to_string(),
                xp_reward: 15,
                kind: ActivityKind::Explore {
                    interactions: vec![
                        "PUSH".to_string(),
                        "PULL".to_string(),
                        "HIT".to_string(),
                    ],
                },
            },
            ActivityItem {
                id: "practice-force".to_string(),
                title: "Quick Practice: Effects of Force".to_string(),
                description:
                    "Test yourself on how force changes the speed, direction, and shape of objects."
                        .to_string(),
                duration_label: "3 min".to_string(),
                xp_reward: 20,
                kind: ActivityKind::Practice {
                    questions: vec![
                        Question {
                            id: "q1".to_string(),
                            question: "What happens when force is applied to an object?"
                                .to_string(),
                            options: vec![
                                "It changes color".to_string(),
                                "It changes motion or shape".to_string(),
                                "It stays exactly the same".to_string(),
                                "It becomes invisible".to_string(),
                            ],
                            correct_index: 1,
                        },
                        Question {
                            id: "q2".to_string(),
                            question: "Which of these is an example of force?".to_string(),
                            options: vec![
                                "Thinking about moving".to_string(),
                                "Pushing a shopping cart".to_string(),
                                "Standing still".to_string(),
                                "Sleeping".to_string(),
                            ],
                            correct_index: 1,
                        },
                        Question {
                            id: "q3".to_string(),
                            question: "Force can change which of the following?".to_string(),
                            options: vec![
                                "Only speed".to_string(),
                                "Only direction".to_string(),
                                "Speed, direction, and shape".to_string(),
                                "Nothing at all".to_string(),
                            ],
                            correct_index: 2,
                        },
                    ],
                },
            },
            ActivityItem {
                id: "curiosity-force".to_string(),
                title: "Why doesn't a ball roll forever?".to_string(),
                description: "Uncover the hidden force that slows objects down over time."
                    .to_string(),
                duration_label: "2 min".to_string(),
                xp_reward: 10,
                kind: ActivityKind::Curiosity {
                    body: "Have you ever wondered why a rolling ball eventually stops? The answer \
lies in a hidden force called friction.\n\nWhen a ball rolls on the ground, tiny bumps on both \
the ball and the surface rub against each other. This rubbing creates friction - a force that \
opposes motion.\n\nFriction acts like an invisible brake, gradually converting the ball's motion \
energy into heat. The rougher the surface, the stronger the friction, and the faster the ball \
stops.\n\nWithout friction, a ball would roll forever! In space, where there's no air resistance \
or surface friction, objects keep moving indefinitely once set in motion.\n\nFun fact: Ice is \
slippery because it has very low friction. That's why hockey pucks glide so smoothly!"
                        .to_string(),
                },
            },
        ],
    }
}

fn subsections() -> Vec<Subsection> {
    let section = |id: &str, full_title: &str, description: &str, status| Subsection {
        id: id.to_string(),
        full_title: full_title.to_string(),
        description: description.to_string(),
        status,
    };
    vec![
        section(
            "8.1",
            "8.1 Balanced and Unbalanced Force",
            "Learn how forces act on objects and understand the difference between balanced \
             and unbalanced forces.",
            SectionStatus::Available,
        ),
        section(
            "8.2",
            "8.2 First Law of Motion",
            "Explore Newton's First Law of Motion and why objects remain at rest or in \
             uniform motion unless acted upon by an external force.",
            SectionStatus::Available,
        ),
        section(
            "8.3",
            "8.3 Inertia and Mass",
            "Dive deep into the concept of inertia and how mass affects an object's \
             resistance to changes in motion.",
            SectionStatus::Available,
        ),
        section(
            "8.4",
            "8.4 Second Law of Motion",
            "Master Newton's Second Law: F = ma, the relationship between force, mass, and \
             acceleration.",
            SectionStatus::Locked,
        ),
        section(
            "8.5",
            "8.5 Third Law of Motion",
            "Discover Newton's Third Law: for every action, there is an equal and opposite \
             reaction.",
            SectionStatus::Locked,
        ),
    ]
}

/// Curiosity Centre library for the sample chapter
pub fn curiosity_library() -> CuriosityLibrary {
    let mut library = CuriosityLibrary::new();
    library.add_chapter_items(chapter_id(), chapter_shelf());
    library.add_topic(
        Topic {
            id: "topic-1".to_string(),
            title: "Astrophysics".to_string(),
            description: "Study of celestial objects, space, and the universe".to_string(),
            content_count: 45,
        },
        astrophysics_shelf(),
    );
    for topic in general_topics() {
        library.add_topic(topic, Vec::new());
    }
    for article in related_news() {
        library.add_news(article);
    }
    library
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    duration_label: &str,
    category: CuriosityCategory,
    kind: CuriosityKind,
) -> CuriosityItem {
    CuriosityItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration_label: duration_label.to_string(),
        category,
        kind,
    }
}

fn video(url: &str) -> CuriosityKind {
    CuriosityKind::Video {
        youtube_url: url.to_string(),
    }
}

fn chapter_shelf() -> Vec<CuriosityItem> {
    use CuriosityCategory::{Core, GoDeeper};
    vec![
        item(
            "cc-video-1",
            "Real-World Applications of Force",
            "See how forces work in everyday life - from sports to engineering",
            "6 min",
            Core,
            video("https://www.youtube.com/watch?v=example1"),
        ),
        item(
            "cc-tool-1",
            "Force Vector Calculator",
            "Interactive tool to calculate and visualize force vectors",
            "5 min",
            Core,
            CuriosityKind::Tool {
                url: "/tools/force-calculator".to_string(),
            },
        ),
        item(
            "cc-simulation-1",
            "Newton's Laws Simulator",
            "Advanced physics simulation to experiment with Newton's three laws",
            "10 min",
            GoDeeper,
            CuriosityKind::Simulation {
                url: "/simulations/newtons-laws".to_string(),
            },
        ),
        item(
            "cc-course-1",
            "Advanced Mechanics Course",
            "Deep dive into classical mechanics and advanced force concepts",
            "8 min",
            GoDeeper,
            CuriosityKind::Course {
                url: "/courses/advanced-mechanics".to_string(),
                lessons: 12,
            },
        ),
        item(
            "cc-video-2",
            "Forces in Space Exploration",
            "How astronauts and spacecraft deal with forces in zero gravity",
            "7 min",
            Core,
            video("https://www.youtube.com/watch?v=example2"),
        ),
        item(
            "cc-book-1",
            "The Physics of Motion",
            "Comprehensive guide covering all aspects of force and motion",
            "45 min read",
            GoDeeper,
            CuriosityKind::Book {
                url: "/books/physics-of-motion".to_string(),
                pages: 120,
            },
        ),
        item(
            "cc-tool-2",
            "Friction Analyzer",
            "Explore different surfaces and their friction coefficients",
            "4 min",
            Core,
            CuriosityKind::Tool {
                url: "/tools/friction-analyzer".to_string(),
            },
        ),
        item(
            "cc-simulation-2",
            "Projectile Motion Lab",
            "Simulate projectile trajectories with different forces",
            "6 min",
            Core,
            CuriosityKind::Simulation {
                url: "/simulations/projectile-motion".to_string(),
            },
        ),
        item(
            "cc-video-3",
            "Quantum Forces Explained",
            "Beyond classical physics - understanding quantum mechanical forces",
            "9 min",
            GoDeeper,
            video("https://www.youtube.com/watch?v=example3"),
        ),
    ]
}

fn astrophysics_shelf() -> Vec<CuriosityItem> {
    use CuriosityCategory::{Core, GoDeeper};
    vec![
        item(
            "astro-video-1",
            "Introduction to Black Holes",
            "Understanding the most mysterious objects in the universe",
            "8 min",
            Core,
            video("https://www.youtube.com/watch?v=example1"),
        ),
        item(
            "astro-simulation-1",
            "Galaxy Formation Simulator",
            "Watch galaxies form and evolve over billions of years",
            "10 min",
            Core,
            CuriosityKind::Simulation {
                url: "/simulations/galaxy-formation".to_string(),
            },
        ),
        item(
            "astro-video-2",
            "Dark Matter and Dark Energy",
            "Exploring the invisible forces shaping our universe",
            "12 min",
            GoDeeper,
            video("https://www.youtube.com/watch?v=example2"),
        ),
        item(
            "astro-tool-1",
            "Star Life Cycle Calculator",
            "Calculate the lifespan and evolution of different star types",
            "5 min",
            Core,
            CuriosityKind::Tool {
                url: "/tools/star-lifecycle".to_string(),
            },
        ),
        item(
            "astro-course-1",
            "Cosmology Fundamentals",
            "From the Big Bang to the fate of the universe",
            "15 min",
            GoDeeper,
            CuriosityKind::Course {
                url: "/courses/cosmology-fundamentals".to_string(),
                lessons: 8,
            },
        ),
        item(
            "astro-book-1",
            "A Brief History of Time",
            "Stephen Hawking's classic guide to the universe",
            "60 min read",
            GoDeeper,
            CuriosityKind::Book {
                url: "/books/brief-history-time".to_string(),
                pages: 256,
            },
        ),
        item(
            "astro-video-3",
            "The Life and Death of Stars",
            "From stellar birth in nebulae to supernova explosions",
            "10 min",
            Core,
            video("https://www.youtube.com/watch?v=example3"),
        ),
    ]
}

fn general_topics() -> Vec<Topic> {
    let topic = |id: &str, title: &str, description: &str, content_count| Topic {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content_count,
    };
    vec![
        topic(
            "topic-2",
            "Space Technology",
            "Rockets, satellites, and space exploration tech",
            38,
        ),
        topic(
            "topic-3",
            "Quantum Mechanics",
            "The physics of the very small - atoms and particles",
            52,
        ),
        topic(
            "topic-4",
            "Renewable Energy",
            "Solar, wind, and sustainable power solutions",
            41,
        ),
        topic("topic-5", "Robotics & AI", "Intelligent machines and automation", 36),
        topic(
            "topic-6",
            "Nanotechnology",
            "Engineering at the molecular scale",
            29,
        ),
        topic(
            "topic-7",
            "Climate Science",
            "Understanding Earth's climate and weather patterns",
            33,
        ),
        topic(
            "topic-8",
            "Biotechnology",
            "Living systems and biological processes",
            44,
        ),
    ]
}

fn related_news() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: "news-1".to_string(),
            title: "NASA Discovers New Forces in Space".to_string(),
            summary: "Scientists at NASA have identified unusual gravitational forces near \
                      distant galaxies that challenge our understanding of physics."
                .to_string(),
            date: "2025-01-10".to_string(),
            source: "Space Science Today".to_string(),
            category: "Space".to_string(),
            read_time: "5 min read".to_string(),
            body: "NASA scientists have made a groundbreaking discovery that could revolutionize \
our understanding of fundamental forces in the universe. Using data from the James Webb Space \
Telescope, researchers observed anomalous gravitational patterns near the edges of distant \
galaxies.\n\nThese unusual force interactions suggest the presence of previously unknown \
particles or a modification to our understanding of gravity at cosmic scales.\n\nThe team is \
conducting further observations and mathematical modeling to understand the nature of these \
mysterious forces."
                .to_string(),
        },
        NewsArticle {
            id: "news-2".to_string(),
            title: "Breakthrough in Quantum Force Measurement".to_string(),
            summary: "Researchers develop a new technique to measure quantum forces with \
                      unprecedented precision, opening doors to quantum computing advances."
                .to_string(),
            date: "2025-01-08".to_string(),
            source: "Quantum Physics Weekly".to_string(),
            category: "Quantum".to_string(),
            read_time: "4 min read".to_string(),
            body: "A team of physicists at MIT has developed a revolutionary technique for \
measuring quantum forces at the atomic scale with accuracy never before achieved. The new \
method uses laser-cooled atoms trapped in an optical lattice, allowing researchers to detect \
forces as small as 10^-21 Newtons.\n\nApplications of this technology extend beyond quantum \
computing. It could lead to advances in materials science, medical imaging, and even the \
search for new fundamental particles."
                .to_string(),
        },
        NewsArticle {
            id: "news-3".to_string(),
            title: "Engineers Create Friction-Free Material".to_string(),
            summary: "A new synthetic material with near-zero friction could transform \
                      transportation and manufacturing industries worldwide."
                .to_string(),
            date: "2025-01-05".to_string(),
            source: "Engineering Innovation".to_string(),
            category: "Engineering".to_string(),
            read_time: "6 min read".to_string(),
            body: "Material scientists at Stanford University have created a revolutionary \
synthetic surface with friction coefficients approaching zero. The material uses a unique \
molecular structure inspired by gecko feet and lotus leaves; surfaces coated with it exhibit \
friction levels 1000 times lower than Teflon.\n\nPotential applications include high-speed \
trains with 50% less energy consumption, industrial machinery with extended lifespans, and \
aerospace components for improved efficiency."
                .to_string(),
        },
    ]
}
