use crate::domain::model::CatalogEntry;

/// Category keys in the order the site lists them.
const CATEGORIES: &[&str] = &[
    "ai-ml",
    "web-development",
    "full-stack",
    "mobile-apps",
    "database",
    "cybersecurity",
];

/// Fixed projects for a category. Unknown keys yield an empty slice.
pub fn projects_for(category: &str) -> &'static [CatalogEntry] {
    match category {
        "ai-ml" => AI_ML,
        "web-development" => WEB_DEVELOPMENT,
        "full-stack" => FULL_STACK,
        "mobile-apps" => MOBILE_APPS,
        "database" => DATABASE,
        "cybersecurity" => CYBERSECURITY,
        _ => &[],
    }
}

pub fn categories() -> &'static [&'static str] {
    CATEGORIES
}

const AI_ML: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        title: "Smart Recommendation System",
        description: "AI-powered product recommendation engine using collaborative filtering and matrix factorization techniques",
        technologies: &["Python", "TensorFlow", "Pandas", "Flask", "Redis"],
        difficulty: "Advanced",
        price: "₹1,299",
    },
    CatalogEntry {
        id: 2,
        title: "Computer Vision Object Detection",
        description: "Real-time object detection system using YOLO algorithm with custom dataset training",
        technologies: &["Python", "OpenCV", "PyTorch", "YOLO", "CUDA"],
        difficulty: "Expert",
        price: "₹1,899",
    },
    CatalogEntry {
        id: 3,
        title: "Natural Language Processing Chatbot",
        description: "Intelligent chatbot with sentiment analysis, intent recognition, and context awareness",
        technologies: &["Python", "NLTK", "spaCy", "Transformers", "FastAPI"],
        difficulty: "Advanced",
        price: "₹1,599",
    },
    CatalogEntry {
        id: 4,
        title: "Predictive Analytics Dashboard",
        description: "Machine learning model for sales forecasting with interactive dashboard and real-time updates",
        technologies: &["Python", "Scikit-learn", "Plotly", "Streamlit", "PostgreSQL"],
        difficulty: "Intermediate",
        price: "₹1,199",
    },
    CatalogEntry {
        id: 5,
        title: "Medical Image Classification",
        description: "Deep learning model for medical image classification with 95%+ accuracy",
        technologies: &["Python", "TensorFlow", "Keras", "CNN", "Medical Imaging"],
        difficulty: "Advanced",
        price: "₹1,499",
    },
];

const WEB_DEVELOPMENT: &[CatalogEntry] = &[
    CatalogEntry {
        id: 6,
        title: "E-commerce Platform",
        description: "Full-featured online store with payment integration, inventory management, and admin dashboard",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "JWT"],
        difficulty: "Advanced",
        price: "₹1,799",
    },
    CatalogEntry {
        id: 7,
        title: "Social Media Dashboard",
        description: "Analytics dashboard for social media management with real-time metrics and scheduling",
        technologies: &["Vue.js", "Express", "PostgreSQL", "Chart.js", "Socket.io"],
        difficulty: "Intermediate",
        price: "₹1,299",
    },
    CatalogEntry {
        id: 8,
        title: "Real Estate Website",
        description: "Property listing platform with advanced search, filters, and virtual tours",
        technologies: &["React", "Next.js", "Prisma", "Tailwind", "Maps API"],
        difficulty: "Intermediate",
        price: "₹1,199",
    },
    CatalogEntry {
        id: 9,
        title: "Learning Management System",
        description: "Online education platform with course management, video streaming, and progress tracking",
        technologies: &["Angular", "Node.js", "MySQL", "Socket.io", "Video.js"],
        difficulty: "Advanced",
        price: "₹1,999",
    },
    CatalogEntry {
        id: 10,
        title: "Portfolio Website Builder",
        description: "Drag-and-drop portfolio builder for creatives with template library",
        technologies: &["React", "Firebase", "Material-UI", "Framer Motion"],
        difficulty: "Intermediate",
        price: "₹999",
    },
];

const FULL_STACK: &[CatalogEntry] = &[
    CatalogEntry {
        id: 11,
        title: "Task Management App",
        description: "Collaborative project management tool with real-time updates, file sharing, and team chat",
        technologies: &["MERN Stack", "Socket.io", "Redux", "JWT", "AWS S3"],
        difficulty: "Advanced",
        price: "₹1,599",
    },
    CatalogEntry {
        id: 12,
        title: "Food Delivery Platform",
        description: "Complete food ordering system with restaurant admin panel, delivery tracking, and payments",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Google Maps"],
        difficulty: "Expert",
        price: "₹1,999",
    },
    CatalogEntry {
        id: 13,
        title: "Inventory Management System",
        description: "Business inventory tracking with analytics, barcode scanning, and automated reordering",
        technologies: &["Vue.js", "Express", "PostgreSQL", "Redis", "Chart.js"],
        difficulty: "Advanced",
        price: "₹1,899",
    },
    CatalogEntry {
        id: 14,
        title: "Event Booking Platform",
        description: "Event management and ticket booking system with QR codes and seat selection",
        technologies: &["React", "Node.js", "MongoDB", "PayPal", "QR Generator"],
        difficulty: "Advanced",
        price: "₹1,799",
    },
    CatalogEntry {
        id: 15,
        title: "Healthcare Management System",
        description: "Patient management system for clinics with appointment scheduling and medical records",
        technologies: &["Angular", "Spring Boot", "MySQL", "JWT", "PDF Generator"],
        difficulty: "Expert",
        price: "₹1,999",
    },
];

const MOBILE_APPS: &[CatalogEntry] = &[
    CatalogEntry {
        id: 16,
        title: "Fitness Tracking App",
        description: "Cross-platform fitness app with workout plans, progress tracking, and social features",
        technologies: &["React Native", "Firebase", "Redux", "Maps", "HealthKit"],
        difficulty: "Advanced",
        price: "₹1,899",
    },
    CatalogEntry {
        id: 17,
        title: "Expense Tracker",
        description: "Personal finance management mobile app with budget planning and expense categorization",
        technologies: &["Flutter", "Dart", "SQLite", "Charts", "Camera"],
        difficulty: "Intermediate",
        price: "₹1,299",
    },
    CatalogEntry {
        id: 18,
        title: "Recipe Sharing App",
        description: "Social cooking app with recipe sharing, meal planning, and shopping lists",
        technologies: &["React Native", "Node.js", "MongoDB", "Camera", "Push Notifications"],
        difficulty: "Advanced",
        price: "₹1,799",
    },
    CatalogEntry {
        id: 19,
        title: "Language Learning App",
        description: "Interactive language learning with gamification, speech recognition, and progress tracking",
        technologies: &["Flutter", "Firebase", "Audio", "Animations", "Speech API"],
        difficulty: "Advanced",
        price: "₹1,999",
    },
    CatalogEntry {
        id: 20,
        title: "Weather Forecast App",
        description: "Beautiful weather app with location services, widgets, and severe weather alerts",
        technologies: &["React Native", "Weather API", "Maps", "Push", "Widgets"],
        difficulty: "Intermediate",
        price: "₹999",
    },
];

const DATABASE: &[CatalogEntry] = &[
    CatalogEntry {
        id: 21,
        title: "Library Management System",
        description: "Complete library database with book tracking, member management, and fine calculation",
        technologies: &["MySQL", "PHP", "Bootstrap", "CRUD", "Reports"],
        difficulty: "Intermediate",
        price: "₹899",
    },
    CatalogEntry {
        id: 22,
        title: "Student Information System",
        description: "University student database management with grades, attendance, and transcript generation",
        technologies: &["PostgreSQL", "Python", "Django", "Reports", "PDF"],
        difficulty: "Advanced",
        price: "₹1,299",
    },
    CatalogEntry {
        id: 23,
        title: "Hospital Database System",
        description: "Patient and staff management database with appointment scheduling and billing",
        technologies: &["Oracle", "Java", "JDBC", "Triggers", "Stored Procedures"],
        difficulty: "Advanced",
        price: "₹1,599",
    },
    CatalogEntry {
        id: 24,
        title: "E-commerce Database Design",
        description: "Scalable database for online retail with product catalog, orders, and analytics",
        technologies: &["MongoDB", "Indexing", "Aggregation", "Sharding", "Performance"],
        difficulty: "Expert",
        price: "₹1,899",
    },
    CatalogEntry {
        id: 25,
        title: "Banking System Database",
        description: "Secure banking database with transactions, account management, and audit trails",
        technologies: &["SQL Server", "Stored Procedures", "Security", "Backup", "Encryption"],
        difficulty: "Expert",
        price: "₹1,999",
    },
];

const CYBERSECURITY: &[CatalogEntry] = &[
    CatalogEntry {
        id: 26,
        title: "Network Security Scanner",
        description: "Vulnerability assessment tool for networks with automated reporting and remediation suggestions",
        technologies: &["Python", "Nmap", "Scapy", "Tkinter", "Threading"],
        difficulty: "Advanced",
        price: "₹1,799",
    },
    CatalogEntry {
        id: 27,
        title: "Password Strength Analyzer",
        description: "Tool to analyze and improve password security with entropy calculation and suggestions",
        technologies: &["Python", "Regex", "Entropy", "GUI", "Cryptography"],
        difficulty: "Intermediate",
        price: "₹999",
    },
    CatalogEntry {
        id: 28,
        title: "Intrusion Detection System",
        description: "Real-time network intrusion detection with machine learning and alert system",
        technologies: &["Python", "Machine Learning", "Wireshark", "Alerts", "Logging"],
        difficulty: "Expert",
        price: "₹1,999",
    },
    CatalogEntry {
        id: 29,
        title: "Encryption/Decryption Tool",
        description: "File encryption tool with multiple algorithms and digital signature verification",
        technologies: &["Java", "AES", "RSA", "Digital Signatures", "Key Management"],
        difficulty: "Advanced",
        price: "₹1,499",
    },
    CatalogEntry {
        id: 30,
        title: "Web Application Security Tester",
        description: "Automated web app vulnerability scanner with OWASP compliance and detailed reports",
        technologies: &["Python", "Selenium", "OWASP", "Reports", "SQL Injection"],
        difficulty: "Expert",
        price: "₹1,999",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_category_has_five_entries() {
        let projects = projects_for("ai-ml");
        assert_eq!(projects.len(), 5);
        assert_eq!(projects[0].title, "Smart Recommendation System");
        assert_eq!(projects[0].technologies[0], "Python");
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(projects_for("unknown-key").is_empty());
        assert!(projects_for("").is_empty());
        assert!(projects_for("AI-ML").is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_categories() {
        let ids: Vec<u32> = categories()
            .iter()
            .flat_map(|key| projects_for(key).iter().map(|p| p.id))
            .collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 30);
        assert_eq!(unique.len(), ids.len());
    }
}
