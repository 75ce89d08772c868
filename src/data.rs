use crate::models::{ContactInfo, FaqEntry, ProcessStep, Project, Service, Testimonial};
use crate::state::filter::ALL_CATEGORY;

pub const HERO_SERVICES: &[&str] = &[
    "Custom Web Development",
    "E-commerce Solutions",
    "Mobile Applications",
    "Enterprise Software",
    "Digital Transformation",
];

pub const CLIENT_LOGOS: &[(&str, &str)] = &[
    ("TechCorp", "TC"),
    ("InnovateLab", "IL"),
    ("DataFlow", "DF"),
    ("CloudSync", "CS"),
    ("NextGen", "NG"),
    ("WebFlow", "WF"),
];

pub const PORTFOLIO_CATEGORIES: &[&str] = &[ALL_CATEGORY, "Web", "Mobile", "Enterprise", "E-commerce"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Platform",
        description: "Modern e-commerce solution with advanced features and seamless user experience.",
        image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "E-commerce",
        tech_stack: &["React", "Node.js", "MongoDB", "Stripe"],
        live_url: Some("#"),
        repo_url: Some("#"),
    },
    Project {
        id: 2,
        title: "Corporate Website",
        description: "Professional corporate website with modern design and optimized performance.",
        image: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Web",
        tech_stack: &["Next.js", "TypeScript", "Tailwind CSS"],
        live_url: Some("#"),
        repo_url: Some("#"),
    },
    Project {
        id: 3,
        title: "Mobile Banking App",
        description: "Secure and intuitive mobile banking application with advanced security features.",
        image: "https://images.pexels.com/photos/3184293/pexels-photo-3184293.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Mobile",
        tech_stack: &["React Native", "Firebase", "Redux"],
        live_url: Some("#"),
        repo_url: None,
    },
    Project {
        id: 4,
        title: "Enterprise Dashboard",
        description: "Comprehensive enterprise dashboard for data visualization and management.",
        image: "https://images.pexels.com/photos/3184294/pexels-photo-3184294.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Enterprise",
        tech_stack: &["Vue.js", "D3.js", "PostgreSQL"],
        live_url: Some("#"),
        repo_url: Some("#"),
    },
    Project {
        id: 5,
        title: "SaaS Platform",
        description: "Scalable SaaS platform with multi-tenant architecture and real-time features.",
        image: "https://images.pexels.com/photos/3184295/pexels-photo-3184295.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Web",
        tech_stack: &["React", "Express", "Socket.io", "AWS"],
        live_url: Some("#"),
        repo_url: Some("#"),
    },
    Project {
        id: 6,
        title: "Food Delivery App",
        description: "Complete food delivery solution with real-time tracking and payment integration.",
        image: "https://images.pexels.com/photos/3184296/pexels-photo-3184296.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Mobile",
        tech_stack: &["Flutter", "Firebase", "Google Maps API"],
        live_url: Some("#"),
        repo_url: None,
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Custom Web Development",
        description: "End-to-end web development solutions tailored to your business needs with modern technologies and best practices.",
        features: &["React/Next.js Development", "Full-Stack Solutions", "API Integration", "Database Design"],
    },
    Service {
        title: "Custom Website Design",
        description: "Beautiful, responsive websites that capture your brand essence and engage your audience effectively.",
        features: &["UI/UX Design", "Responsive Design", "Brand Integration", "User Experience"],
    },
    Service {
        title: "E-commerce Solutions",
        description: "Complete e-commerce platforms with secure payment processing and comprehensive inventory management.",
        features: &["Online Store Setup", "Payment Integration", "Inventory Management", "Order Processing"],
    },
    Service {
        title: "Mobile Applications",
        description: "Native and cross-platform mobile apps that deliver exceptional user experiences across all devices.",
        features: &["iOS & Android Apps", "Cross-Platform Development", "App Store Deployment", "Push Notifications"],
    },
    Service {
        title: "SEO Optimization",
        description: "Comprehensive SEO strategies to improve your search rankings and drive organic traffic to your website.",
        features: &["On-Page SEO", "Technical SEO", "Content Optimization", "Performance Monitoring"],
    },
    Service {
        title: "Website Optimization",
        description: "Performance optimization and maintenance to ensure your website runs at peak efficiency and security.",
        features: &["Speed Optimization", "Security Updates", "Regular Maintenance", "Performance Monitoring"],
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: 1,
        title: "Discovery & Strategy",
        description: "We dive deep into understanding your business goals, target audience, and competitive landscape to create a strategic foundation that drives results.",
        details: &[
            "Comprehensive Business Analysis",
            "Target Audience Research & Personas",
            "Competitive Landscape Analysis",
            "Technical Requirements Planning",
        ],
        deliverables: &["Strategy Document", "Project Roadmap", "Technical Specifications"],
        duration: "1-2 weeks",
    },
    ProcessStep {
        id: 2,
        title: "Design & User Experience",
        description: "Our design team crafts intuitive user experiences and stunning visual designs that align perfectly with your brand and convert visitors into customers.",
        details: &[
            "User Experience (UX) Design",
            "Visual Design & Brand Integration",
            "Interactive Wireframes & Prototypes",
            "Design System Creation",
        ],
        deliverables: &["Design Mockups", "Interactive Prototypes", "Style Guide"],
        duration: "2-3 weeks",
    },
    ProcessStep {
        id: 3,
        title: "Development & Implementation",
        description: "We bring your vision to life using modern technologies, ensuring your website is fast, secure, and scalable.",
        details: &[
            "Frontend Development",
            "Backend Development & APIs",
            "Database Design & Integration",
            "Third-party Service Integration",
        ],
        deliverables: &["Functional Website", "Admin Dashboard", "API Documentation"],
        duration: "3-6 weeks",
    },
    ProcessStep {
        id: 4,
        title: "Testing & Quality Assurance",
        description: "Rigorous testing across devices, browsers, and scenarios so your website performs flawlessly.",
        details: &[
            "Comprehensive Quality Assurance",
            "Cross-browser & Device Testing",
            "Performance & Speed Optimization",
            "Security & Vulnerability Testing",
        ],
        deliverables: &["Test Reports", "Performance Metrics", "Security Audit"],
        duration: "1-2 weeks",
    },
    ProcessStep {
        id: 5,
        title: "Launch & Ongoing Success",
        description: "We deploy your website with precision and keep supporting it as your business grows.",
        details: &[
            "Strategic Website Deployment",
            "Performance Monitoring & Analytics",
            "Team Training & Documentation",
            "Ongoing Support & Maintenance",
        ],
        deliverables: &["Live Website", "Analytics Setup", "Training Materials"],
        duration: "Ongoing",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        position: "CEO",
        company: "TechStart Inc.",
        content: "Pacific Softwares transformed our digital presence completely. Their attention to detail and technical expertise is unmatched. Our website now converts 3x better than before.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        position: "Founder",
        company: "E-commerce Plus",
        content: "Working with Pacific Softwares was a game-changer for our business. They delivered a robust e-commerce platform that handles our growing customer base seamlessly.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        position: "Marketing Director",
        company: "Digital Innovations",
        content: "The team at Pacific Softwares exceeded our expectations. Their process is thorough, communication is excellent, and the final product is exactly what we envisioned.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        id: 4,
        name: "David Thompson",
        position: "CTO",
        company: "CloudSync Solutions",
        content: "Pacific Softwares delivered a complex enterprise solution on time and within budget. Their technical expertise and project management skills are outstanding.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: 1,
        question: "How long does it take to build a website?",
        answer: "The timeline depends on the complexity of your project. A simple website typically takes 2-4 weeks, while complex e-commerce or enterprise solutions can take 6-12 weeks. We'll provide a detailed timeline during our initial consultation.",
        category: "Timeline",
    },
    FaqEntry {
        id: 2,
        question: "What's included in your web development service?",
        answer: "Our comprehensive service includes custom design, responsive development, content management system, SEO optimization, security implementation, testing, deployment, and 3 months of free support and maintenance.",
        category: "Services",
    },
    FaqEntry {
        id: 3,
        question: "Do you provide ongoing maintenance and support?",
        answer: "Yes! We offer various maintenance packages including security updates, content updates, performance monitoring, backup services, and technical support. We believe in long-term partnerships with our clients.",
        category: "Support",
    },
    FaqEntry {
        id: 4,
        question: "Can you help with SEO and digital marketing?",
        answer: "Absolutely! We provide comprehensive SEO services including on-page optimization, technical SEO, content strategy, and performance monitoring. We can also connect you with our trusted digital marketing partners.",
        category: "SEO",
    },
    FaqEntry {
        id: 5,
        question: "What technologies do you use?",
        answer: "We use modern, industry-standard technologies including React, Next.js, Node.js, TypeScript, Tailwind CSS, and various databases. We choose the best technology stack based on your specific requirements.",
        category: "Technology",
    },
    FaqEntry {
        id: 6,
        question: "Do you work with clients internationally?",
        answer: "Yes, we work with clients worldwide. We have experience working across different time zones and have established processes for remote collaboration, communication, and project management.",
        category: "General",
    },
    FaqEntry {
        id: 7,
        question: "What's your pricing structure?",
        answer: "Our pricing is project-based and depends on the scope, complexity, and timeline. We provide transparent, detailed quotes with no hidden fees. We also offer flexible payment plans to accommodate different budgets.",
        category: "Pricing",
    },
    FaqEntry {
        id: 8,
        question: "Can you redesign my existing website?",
        answer: "Definitely! We specialize in website redesigns and can help modernize your existing site, improve performance, enhance user experience, and ensure mobile responsiveness while preserving your brand identity.",
        category: "Services",
    },
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "$50,000+",
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉",
        title: "Email Us",
        content: "hello@pacificsoftwares.com",
        description: "Send us an email anytime",
    },
    ContactInfo {
        icon: "☎",
        title: "Call Us",
        content: "+1 (555) 123-4567",
        description: "Mon-Fri from 9am to 6pm",
    },
    ContactInfo {
        icon: "⌂",
        title: "Visit Us",
        content: "123 Tech Street, Suite 100",
        description: "San Francisco, CA 94105",
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "#"),
    ("Twitter", "#"),
    ("LinkedIn", "#"),
    ("Instagram", "#"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter::FilterableList;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(projects.len(), PROJECTS.len());
        let faqs: HashSet<_> = FAQS.iter().map(|f| f.id).collect();
        assert_eq!(faqs.len(), FAQS.len());
        let testimonials: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(testimonials.len(), TESTIMONIALS.len());
    }

    #[test]
    fn every_project_category_has_a_filter_button() {
        for project in PROJECTS {
            assert!(
                PORTFOLIO_CATEGORIES.contains(&project.category),
                "missing filter for {}",
                project.category
            );
        }
    }

    #[test]
    fn mobile_filter_over_real_projects() {
        let mut list = FilterableList::new(PROJECTS, Project::search_fields);
        list.set_category("Mobile");
        let ids: Vec<u32> = list.results().items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 6]);
    }

    #[test]
    fn faq_search_hits_answers() {
        let mut list = FilterableList::new(FAQS, FaqEntry::search_fields);
        list.set_search_term("time zones");
        let ids: Vec<u32> = list.results().items().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![6]);

        list.set_search_term("zzz-no-match");
        assert!(list.results().no_matches());
    }
}
