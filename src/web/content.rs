//! Fixed marketing copy for the home and about pages.

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Card] = &[
    Card {
        title: "Custom Development",
        description: "Tailored solutions built with cutting-edge technologies to meet your specific business needs.",
    },
    Card {
        title: "Mobile-First Approach",
        description: "Responsive designs that work seamlessly across all devices and platforms.",
    },
    Card {
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and deployment strategies for modern applications.",
    },
    Card {
        title: "AI Integration",
        description: "Smart solutions powered by artificial intelligence and machine learning.",
    },
];

pub const SERVICES: &[Offering] = &[
    Offering {
        title: "Web Development",
        description: "Modern web applications with React, Vue, and Angular",
        technologies: &["React", "Next.js", "TypeScript", "Node.js"],
    },
    Offering {
        title: "Mobile Apps",
        description: "Native and cross-platform mobile applications",
        technologies: &["React Native", "Flutter", "iOS", "Android"],
    },
    Offering {
        title: "Cloud Services",
        description: "AWS, Azure, and GCP deployment and management",
        technologies: &["AWS", "Docker", "Kubernetes", "DevOps"],
    },
    Offering {
        title: "AI & ML",
        description: "Intelligent solutions with machine learning algorithms",
        technologies: &["Python", "TensorFlow", "PyTorch", "OpenAI"],
    },
];

pub const PROCESS: &[Card] = &[
    Card {
        title: "Discovery & Planning",
        description: "We analyze your requirements and create a detailed project roadmap.",
    },
    Card {
        title: "Design & Development",
        description: "Our team builds your solution using agile methodologies and best practices.",
    },
    Card {
        title: "Testing & Deployment",
        description: "Comprehensive testing ensures quality before smooth deployment to production.",
    },
    Card {
        title: "Support & Maintenance",
        description: "Ongoing support and updates to keep your application running smoothly.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CTO, TechStart",
        quote: "Soft Houze delivered an exceptional web application that exceeded our expectations. Their attention to detail and technical expertise is unmatched.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Founder, InnovateCorp",
        quote: "The mobile app they built for us has been a game-changer. Professional, reliable, and always available for support.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Manager, DataFlow",
        quote: "Their AI integration transformed our business processes. The team's knowledge of machine learning is impressive.",
    },
];

pub const VALUES: &[Card] = &[
    Card {
        title: "Innovation",
        description: "We embrace cutting-edge technologies and creative solutions to solve complex problems and drive digital transformation.",
    },
    Card {
        title: "Quality",
        description: "We deliver exceptional quality in every project, ensuring robust, scalable, and reliable software solutions.",
    },
    Card {
        title: "Collaboration",
        description: "We work closely with our clients as partners, fostering transparent communication and shared success.",
    },
    Card {
        title: "Integrity",
        description: "We maintain the highest standards of honesty, transparency, and ethical practices in all our dealings.",
    },
];

pub const SKILLS: &[&str] = &[
    "Frontend Development",
    "Backend Development",
    "Mobile Development",
    "Cloud Solutions",
    "AI/ML Integration",
    "DevOps & Infrastructure",
];

pub const TEAM: &[Person] = &[
    Person {
        name: "Alex Rodriguez",
        role: "CEO & Founder",
        bio: "10+ years in software development and business strategy. Expert in scaling tech companies.",
    },
    Person {
        name: "Sarah Chen",
        role: "CTO",
        bio: "Expert in cloud architecture and scalable systems. Former senior engineer at major tech companies.",
    },
    Person {
        name: "Michael Johnson",
        role: "Lead Designer",
        bio: "Specialist in UX/UI design and user research. Award-winning designer with 8+ years experience.",
    },
    Person {
        name: "Emily Davis",
        role: "Senior Developer",
        bio: "Full-stack developer with expertise in modern frameworks and AI integration technologies.",
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2016",
        title: "Company Founded",
        description: "Soft Houze was founded with a vision to create innovative software solutions for businesses of all sizes.",
    },
    Milestone {
        year: "2018",
        title: "Team Expansion",
        description: "Grew our team to 15 talented developers and designers, expanding our service offerings to include mobile development.",
    },
    Milestone {
        year: "2020",
        title: "Major Milestone",
        description: "Completed 100+ successful projects and established partnerships with leading cloud providers.",
    },
    Milestone {
        year: "2022",
        title: "AI Integration",
        description: "Pioneered AI-powered solutions and machine learning integrations for our clients.",
    },
    Milestone {
        year: "2024",
        title: "Global Reach",
        description: "Expanded internationally with clients across 25 countries and a team of 30+ professionals.",
    },
];
