//! Marketing copy for the static sections of every page.

use crate::catalog::Category;

pub struct Company {
    pub name: &'static str,
    pub wordmark: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub office: &'static str,
    pub region: &'static str,
    pub contact_intro: &'static str,
}

pub const COMPANY: Company = Company {
    name: "Khoroush",
    wordmark: "KHOROUSH",
    tagline: "From Blueprint to Key-Turn — Your trusted partner in property excellence.",
    email: "info@khoroush.ca",
    phone: "+1 (XXX) XXX-XXXX",
    office: "Toronto, Ontario, Canada",
    region: "Montreal, Quebec, Canada",
    contact_intro: "Reach out to us through any of the following channels. We're here to help with all your real estate, construction, and property management needs.",
};

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

/// Static sections surrounding a category's listing grid.
pub struct CategoryCopy {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub services_heading: &'static str,
    pub services_intro: &'static str,
    pub services: &'static [Feature],
    pub listings_heading: &'static str,
    pub listings_intro: &'static str,
    pub empty_message: &'static str,
    pub process_heading: &'static str,
    pub process_intro: &'static str,
    pub process: &'static [Step],
    pub why_heading: &'static str,
    pub why_body: &'static str,
    pub why_points: &'static [&'static str],
    pub cta_title: &'static str,
    pub cta_body: &'static str,
    pub cta_button: &'static str,
    pub details_heading: &'static str,
    pub detail_cta: &'static str,
}

pub fn category_copy(category: Category) -> &'static CategoryCopy {
    match category {
        Category::RealEstate => &REAL_ESTATE,
        Category::Construction => &CONSTRUCTION,
        Category::PropertyManagement => &PROPERTY_MANAGEMENT,
    }
}

const REAL_ESTATE: CategoryCopy = CategoryCopy {
    hero_title: "Your Partner in Property Growth",
    hero_subtitle: "Navigate the Canadian real estate market with confidence and expertise.",
    hero_cta: "Schedule a Consultation",
    services_heading: "Comprehensive Real Estate Services",
    services_intro: "Whether you're buying, selling, or investing, we provide the expertise you need.",
    services: &[
        Feature {
            title: "Residential Sales",
            description: "From condos to luxury estates, we connect you with your ideal property.",
            link: None,
        },
        Feature {
            title: "Investment Consulting",
            description: "Strategic guidance to maximize returns and build wealth through real estate.",
            link: None,
        },
        Feature {
            title: "Market Analysis",
            description: "Data-driven insights to make informed buying and selling decisions.",
            link: None,
        },
        Feature {
            title: "Commercial Properties",
            description: "Expert representation for office spaces, retail, and industrial properties.",
            link: None,
        },
    ],
    listings_heading: "Featured Listings",
    listings_intro: "Explore our current selection of properties for sale.",
    empty_message: "No listings available at the moment. Check back soon!",
    process_heading: "Our Process",
    process_intro: "A streamlined approach to achieving your real estate goals.",
    process: &[
        Step {
            step: "01",
            title: "Consultation",
            description: "Understand your needs and objectives",
        },
        Step {
            step: "02",
            title: "Market Research",
            description: "Analyze opportunities and trends",
        },
        Step {
            step: "03",
            title: "Strategic Action",
            description: "Execute with precision and care",
        },
        Step {
            step: "04",
            title: "Close & Support",
            description: "Seamless transactions and ongoing guidance",
        },
    ],
    why_heading: "Why Choose Our Real Estate Services?",
    why_body: "With deep market knowledge and a client-first philosophy, we deliver results that exceed expectations. Our integrated approach means we understand both the buying and development side of real estate.",
    why_points: &[
        "Exclusive access to off-market properties",
        "Proven negotiation strategies",
        "Comprehensive market analytics",
        "End-to-end transaction support",
        "Investment portfolio optimization",
    ],
    cta_title: "Ready to Find Your Perfect Property?",
    cta_body: "Let's discuss your real estate goals and create a strategy tailored to your needs.",
    cta_button: "Get Started Today",
    details_heading: "Property Details",
    detail_cta: "Contact Us About This Property",
};

const CONSTRUCTION: CategoryCopy = CategoryCopy {
    hero_title: "Built on Precision. Delivered with Integrity.",
    hero_subtitle: "Transforming architectural visions into stunning reality across Canada.",
    hero_cta: "Request a Quote",
    services_heading: "Construction Excellence",
    services_intro: "From concept to completion, we build with uncompromising standards.",
    services: &[
        Feature {
            title: "Custom Builds",
            description: "Bespoke residential and commercial construction from ground up.",
            link: None,
        },
        Feature {
            title: "Commercial Projects",
            description: "Large-scale developments with meticulous planning and execution.",
            link: None,
        },
        Feature {
            title: "Renovations",
            description: "Transform existing spaces with modern design and functionality.",
            link: None,
        },
        Feature {
            title: "Project Management",
            description: "End-to-end oversight ensuring quality, budget, and timeline adherence.",
            link: None,
        },
    ],
    listings_heading: "Our Projects",
    listings_intro: "Showcasing our commitment to quality and excellence.",
    empty_message: "No projects available at the moment. Check back soon!",
    process_heading: "Our Construction Process",
    process_intro: "A proven methodology that ensures excellence at every stage.",
    process: &[
        Step {
            step: "01",
            title: "Concept",
            description: "Vision alignment and feasibility studies",
        },
        Step {
            step: "02",
            title: "Design",
            description: "Architectural planning and permit acquisition",
        },
        Step {
            step: "03",
            title: "Build",
            description: "Construction with rigorous quality control",
        },
        Step {
            step: "04",
            title: "Deliver",
            description: "Final inspection and key handover",
        },
    ],
    why_heading: "Why Choose Khoroush Construction?",
    why_body: "We bring decades of construction expertise, cutting-edge techniques, and unwavering attention to detail. Every project is a testament to our commitment to quality and client satisfaction.",
    why_points: &[
        "Licensed and fully insured contractors",
        "On-time, on-budget delivery",
        "Sustainable building practices",
        "Premium materials and workmanship",
        "Comprehensive warranty coverage",
    ],
    cta_title: "Ready to Build Your Vision?",
    cta_body: "Share your project details and let's create something extraordinary together.",
    cta_button: "Start Your Project",
    details_heading: "Project Details",
    detail_cta: "Inquire About This Project",
};

const PROPERTY_MANAGEMENT: CategoryCopy = CategoryCopy {
    hero_title: "Your Investment, Our Responsibility",
    hero_subtitle: "Professional property management that protects and grows your assets.",
    hero_cta: "Request Management Proposal",
    services_heading: "Comprehensive Management Services",
    services_intro: "We handle every aspect of property management so you don't have to.",
    services: &[
        Feature {
            title: "Tenant Services",
            description: "Screening, placement, and ongoing tenant relations management.",
            link: None,
        },
        Feature {
            title: "Maintenance",
            description: "24/7 emergency response and preventive maintenance coordination.",
            link: None,
        },
        Feature {
            title: "Rent Collection",
            description: "Timely collection and financial management with full transparency.",
            link: None,
        },
        Feature {
            title: "Owner Reporting",
            description: "Detailed monthly reports and real-time portal access.",
            link: None,
        },
    ],
    listings_heading: "Properties We Manage",
    listings_intro: "A selection of residential and commercial properties in our care.",
    empty_message: "No properties available at the moment. Check back soon!",
    process_heading: "How We Work",
    process_intro: "A transparent process designed for maximum efficiency and owner satisfaction.",
    process: &[
        Step {
            step: "01",
            title: "Property Assessment",
            description: "We evaluate your property and develop a customized management strategy.",
        },
        Step {
            step: "02",
            title: "Marketing & Placement",
            description: "Professional marketing to attract quality tenants quickly.",
        },
        Step {
            step: "03",
            title: "Ongoing Management",
            description: "Day-to-day operations, maintenance, and transparent reporting.",
        },
    ],
    why_heading: "Peace of Mind for Property Owners",
    why_body: "Whether you live locally or abroad, we ensure your properties are well-maintained, fully occupied, and generating optimal returns. Our proactive approach minimizes issues and maximizes your investment potential.",
    why_points: &[
        "Rigorous tenant screening process",
        "24/7 emergency maintenance response",
        "Legal compliance and lease management",
        "Monthly financial reporting",
        "Property inspections and preventive care",
    ],
    cta_title: "Let Us Manage Your Properties",
    cta_body: "Focus on growing your portfolio while we handle the day-to-day details.",
    cta_button: "Get Your Free Proposal",
    details_heading: "Property Details",
    detail_cta: "Request Management Services",
};

pub const HOME_PILLARS: &[Feature] = &[
    Feature {
        title: "Real Estate",
        description: "Expert guidance in residential and commercial property sales, investment consulting, and market analysis.",
        link: Some("/real-estate"),
    },
    Feature {
        title: "Construction",
        description: "Custom builds, commercial projects, and renovations delivered with precision and integrity.",
        link: Some("/construction"),
    },
    Feature {
        title: "Property Management",
        description: "Comprehensive tenant services, maintenance coordination, and detailed owner reporting.",
        link: Some("/property-management"),
    },
];

pub const HOME_WHY_POINTS: &[&str] = &[
    "End-to-end property solutions",
    "Decades of combined expertise",
    "Transparent communication",
    "Client-focused approach",
    "Proven track record across Canada",
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "500+",
        label: "Projects Completed",
    },
    Stat {
        value: "98%",
        label: "Client Satisfaction",
    },
    Stat {
        value: "25+",
        label: "Years Experience",
    },
    Stat {
        value: "$500M+",
        label: "Portfolio Value",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Mitchell",
        role: "Property Investor",
        text: "Khoroush transformed our investment strategy. Their integrated approach saved us time and maximized our returns.",
    },
    Testimonial {
        name: "David Chen",
        role: "Commercial Developer",
        text: "From design to completion, the construction team delivered beyond expectations. True professionals.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Property Owner",
        text: "Their management services are exceptional. I travel often and never worry about my properties.",
    },
];

pub const VALUES: &[Feature] = &[
    Feature {
        title: "Excellence",
        description: "We set the highest standards in everything we do, from property transactions to construction quality.",
        link: None,
    },
    Feature {
        title: "Integrity",
        description: "Trust is earned through transparency, honesty, and consistent delivery on our promises.",
        link: None,
    },
    Feature {
        title: "Innovation",
        description: "We embrace new technologies and methodologies to stay ahead in a dynamic market.",
        link: None,
    },
    Feature {
        title: "Client-Centric",
        description: "Your success is our success. We build lasting relationships, not just transactions.",
        link: None,
    },
];

pub const ABOUT_STORY: &[&str] = &[
    "Khoroush was founded on a simple belief: property services should be seamless, integrated, and built on trust. What started as a small real estate practice has evolved into a full-service property brand serving clients across Canada.",
    "Today, we combine real estate expertise, construction excellence, and professional property management under one roof. This integration allows us to deliver unmatched value, coordination, and accountability at every stage of the property lifecycle.",
    "Whether you're buying your first home, developing a commercial project, or managing a portfolio of rental properties, Khoroush is your partner for success.",
];

pub const ABOUT_TEAM: &[&str] = &[
    "Our success is driven by a diverse team of licensed real estate professionals, experienced builders, certified property managers, and dedicated support staff. Together, we deliver comprehensive solutions tailored to each client's unique needs.",
    "Every team member shares our commitment to excellence, integrity, and client satisfaction, values that have made Khoroush a trusted name in Canadian property services.",
];

pub const ABOUT_MISSION: &[&str] = &[
    "To provide integrated, world-class property services that empower our clients to achieve their real estate goals with confidence, clarity, and peace of mind.",
    "From blueprint to key-turn, we're committed to being your trusted partner at every stage of the property journey.",
];

pub const BUSINESS_HOURS: &[&str] = &[
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 4:00 PM",
    "Sunday: By Appointment",
];
