//! Project table compiled into the site.

use crate::catalog::{Category, ProjectRecord};

pub(crate) static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "job-portal",
        title: "Job Portal",
        description: "A job portal with responsive design using React and Ant Design. Focused on JavaScript functionality and styled frontend with Ant Design. Handled job submission forms and basic MongoDB operations.",
        long_description: "Developed a comprehensive job portal using the MERN stack (MongoDB, Express.js, React.js, Node.js). The frontend was built with React and styled using Ant Design components for a professional, responsive interface. The application allows employers to post job listings and job seekers to search and apply for positions. Special attention was given to the JavaScript functionality and MongoDB operations for efficient data management.",
        category: Category::FullStack,
        technologies: &[
            "React",
            "Node.js",
            "MongoDB",
            "Express.js",
            "Ant Design",
            "JavaScript",
            "RESTful API",
        ],
        image: "/job-portal.png",
        live_link: Some("https://job-portal-demo.netlify.app"),
        github_link: Some("https://github.com/Pavan7090/job-portal"),
        features: &[
            "Responsive design optimized for all devices",
            "Job search with filtering capabilities",
            "User authentication for employers and job seekers",
            "Job submission forms with validation",
            "Employer dashboard for managing job postings",
            "Job seeker profiles and application tracking",
            "Admin panel for content moderation",
        ],
        challenges_solved: "One of the main challenges was implementing an efficient job search algorithm that could filter through large numbers of listings quickly. I optimized the MongoDB queries and implemented indexed searching to improve performance. Another challenge was creating a responsive interface that worked well on both desktop and mobile devices, which I addressed by using Ant Design's responsive grid system.",
        show_external_links: false,
        featured: true,
    },
    ProjectRecord {
        id: "event-booking",
        title: "Event Booking and Management System",
        description: "Built an Event Booking and Management System, focusing on frontend design enhancements and backend functionality. Key features include event creation, ticketing, booking management, and refund processing. Interactive UI animations and seamless user experiences with robust functionality.",
        long_description: "This comprehensive event booking and management system allows event organizers to create events, manage ticketing, and process bookings while providing attendees with an intuitive platform to discover and book events. The application was built using the MERN stack with a focus on creating interactive UI animations and seamless user experiences while ensuring robust backend functionality.",
        category: Category::FullStack,
        technologies: &[
            "React",
            "Node.js",
            "MongoDB",
            "Express.js",
            "JavaScript",
            "RESTful API",
            "JWT Authentication",
        ],
        image: "/event-booking-and-mgnt.png",
        live_link: Some("https://event-booking-demo.netlify.app"),
        github_link: Some("https://github.com/Pavan7090/event-booking"),
        features: &[
            "Event creation and ticketing system",
            "Interactive UI animations for enhanced user experience",
            "Secure booking management",
            "Payment processing and refund handling",
            "User authentication and profile management",
            "Event discovery with search and filtering",
            "Admin dashboard for event analytics",
        ],
        challenges_solved: "Developing a secure and efficient payment processing system was a significant challenge. I implemented proper validation and error handling to ensure transactions were processed correctly. Another challenge was creating a booking system that could handle concurrent users, which I solved by implementing proper database locking and transaction management.",
        show_external_links: false,
        featured: true,
    },
    ProjectRecord {
        id: "mobile-app",
        title: "Lynkt Teacher App (React Native)",
        description: "A cross-platform mobile app for teachers, built for the Lynkt platform. (Not publicly available, private repo)",
        long_description: "Developed a React Native mobile application exclusively for teachers on the Lynkt platform. The app enables teachers to manage their workshops, bookings, attendance, and more. Built with a component-based architecture and integrated with RESTful APIs for robust functionality. (App is not deployed and the repository is private as it belongs to the organization.)",
        category: Category::Mobile,
        technologies: &[
            "React Native",
            "Redux",
            "RESTful APIs",
            "JavaScript",
            "Mobile UI Design",
            "Expo",
        ],
        image: "/lynkt.png",
        live_link: None,
        github_link: None,
        features: &[
            "Teacher-only access",
            "Workshop and booking management",
            "Attendance tracking",
            "Push notifications",
            "Responsive design",
            "Secure authentication",
        ],
        challenges_solved: "Ensured secure teacher-only access and optimized performance for mobile devices. Integrated complex booking and attendance flows.",
        show_external_links: true,
        featured: true,
    },
    ProjectRecord {
        id: "lynkt-admin",
        title: "Lynkt Admin Web Application",
        description: "Admin dashboard for the Lynkt platform, built for managing all aspects of the platform including bookings, users, analytics, and more.",
        long_description: "Developed the complete admin side of the Lynkt platform (https://www.lynkt.co/), a web application for administrators. Features include a comprehensive admin dashboard, on-spot booking, workshop dashboard, QR scanner, user management, analytics, all bookings, attendance, waitlist, and contact message management. The application is live and used by the organization for all administrative tasks.",
        category: Category::FullStack,
        technologies: &[
            "React",
            "Node.js",
            "MongoDB",
            "Express.js",
            "Admin Dashboard",
            "Analytics",
            "QR Scanner",
        ],
        image: "/lynkt-admin.png",
        live_link: Some("https://www.lynkt.co/"),
        github_link: None,
        features: &[
            "Admin dashboard overview",
            "On-spot booking system",
            "Workshop management",
            "QR code scanner",
            "User management",
            "Analytics and reporting",
            "All bookings and attendance tracking",
            "Waitlist management",
            "Contact message management",
        ],
        challenges_solved: "Built a scalable admin platform with real-time analytics, secure user management, and seamless booking workflows. Integrated QR scanning and advanced reporting.",
        show_external_links: true,
        featured: true,
    },
    ProjectRecord {
        id: "portfolio",
        title: "Personal Portfolio",
        description: "A modern portfolio website showcasing projects and skills with responsive design and smooth animations.",
        long_description: "Designed and developed a personal portfolio website to showcase projects, skills, and professional experience. The site features a modern design with smooth animations and responsive layouts. The portfolio demonstrates both technical skill and design sensibilities, with performance optimization for all devices.",
        category: Category::Frontend,
        technologies: &[
            "React",
            "Framer Motion",
            "Tailwind CSS",
            "TypeScript",
            "Vite",
            "Responsive Design",
        ],
        image: "https://images.pexels.com/photos/1181673/pexels-photo-1181673.jpeg?auto=compress&cs=tinysrgb&w=800",
        live_link: Some("https://pavan-s-portfolio.netlify.app"),
        github_link: Some("https://github.com/Pavan7090/portfolio"),
        features: &[
            "Responsive design for all device sizes",
            "Smooth page transitions and animations",
            "Interactive project showcases",
            "Dark/light mode theme toggle",
            "Contact form with validation",
            "Performance optimized assets",
            "Accessible design",
        ],
        challenges_solved: "Creating engaging animations while ensuring they didn't impact performance was a significant challenge. I used lazy loading and optimized the animations to run efficiently. Another challenge was implementing a responsive design that looked great on all screen sizes, which I addressed with responsive utility classes.",
        show_external_links: true,
        featured: false,
    },
];
